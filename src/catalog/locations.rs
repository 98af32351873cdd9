use serde::Serialize;
use std::collections::BTreeMap;

/// Group name that admits every location.
pub const ALL_LOCATIONS: &str = "all_locations";
pub const WILDCARD: &str = "*";

/// Named groups of concrete locations. Names and members compare case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LocationGroups {
    groups: BTreeMap<String, Vec<String>>,
}

impl LocationGroups {
    pub fn insert(&mut self, name: &str, members: Vec<String>) {
        self.groups.insert(name.to_lowercase(), members);
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.groups.get(&name.to_lowercase()).map(Vec::as_slice)
    }

    pub fn contains_group(&self, name: &str) -> bool {
        self.groups.contains_key(&name.to_lowercase())
    }

    pub fn knows_location(&self, location: &str) -> bool {
        let needle = location.to_lowercase();
        self.groups
            .values()
            .flatten()
            .any(|member| member.to_lowercase() == needle)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Resolves `location` against a grant's eligible location list. Each entry
    /// is either a group name, resolved through the mapping, or a bare location.
    pub fn matches(&self, location: &str, eligible: &[String]) -> bool {
        if eligible
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(ALL_LOCATIONS))
        {
            return true;
        }

        let needle = location.to_lowercase();
        eligible.iter().any(|entry| match self.get(entry) {
            Some(members) => members
                .iter()
                .any(|member| member == WILDCARD || member.to_lowercase() == needle),
            None => entry.to_lowercase() == needle,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups() -> LocationGroups {
        let mut groups = LocationGroups::default();
        groups.insert(ALL_LOCATIONS, vec![WILDCARD.to_string()]);
        groups.insert(
            "fbih_locations",
            vec!["sarajevo".to_string(), "široki_brijeg".to_string()],
        );
        groups.insert("everywhere", vec![WILDCARD.to_string()]);
        groups
    }

    fn eligible(entries: &[&str]) -> Vec<String> {
        entries.iter().map(|entry| entry.to_string()).collect()
    }

    #[test]
    fn all_locations_group_matches_anything() {
        assert!(groups().matches("anywhere", &eligible(&["all_locations"])));
    }

    #[test]
    fn wildcard_member_matches_anything() {
        assert!(groups().matches("prijedor", &eligible(&["everywhere"])));
    }

    #[test]
    fn group_membership_is_case_insensitive() {
        let groups = groups();
        assert!(groups.matches("Sarajevo", &eligible(&["fbih_locations"])));
        assert!(groups.matches("ŠIROKI_BRIJEG", &eligible(&["FBiH_Locations"])));
        assert!(!groups.matches("banja_luka", &eligible(&["fbih_locations"])));
    }

    #[test]
    fn bare_location_entries_compare_case_insensitively() {
        let groups = groups();
        assert!(groups.matches("Ilidža", &eligible(&["sarajevo", "ilidža"])));
        assert!(!groups.matches("tuzla", &eligible(&["sarajevo", "ilidža"])));
    }

    #[test]
    fn unknown_location_is_reported_as_unknown() {
        let groups = groups();
        assert!(groups.knows_location("SARAJEVO"));
        assert!(!groups.knows_location("atlantis"));
    }

    #[test]
    fn insert_replaces_existing_group() {
        let mut groups = groups();
        groups.insert("FBIH_LOCATIONS", vec!["mostar".to_string()]);
        assert!(groups.matches("mostar", &eligible(&["fbih_locations"])));
        assert!(!groups.matches("sarajevo", &eligible(&["fbih_locations"])));
    }
}
