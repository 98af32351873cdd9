pub mod assessment;
pub mod config;
pub mod criteria;
pub mod profile;
pub mod timestamp;
