use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Toml(toml::value::Datetime),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(text) => text,
        RawTimestamp::Toml(datetime) => datetime.to_string(),
    };
    crate::clock::parse_instant(&text).map_err(D::Error::custom)
}
