// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A member of the group.

use serde::{Deserialize, Serialize};

/// One member of the group, identified by name.
///
/// `excluded_partner` names someone this participant must never be paired
/// with, in either direction (typically a significant other).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,

    #[serde(
        default,
        alias = "significant_other",
        skip_serializing_if = "Option::is_none"
    )]
    pub excluded_partner: Option<String>,
}

impl Participant {
    /// A participant with no excluded partner.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            excluded_partner: None,
        }
    }

    pub fn with_partner(name: impl Into<String>, partner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            excluded_partner: Some(partner.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_alias() {
        let json = r#"[
            {"name": "Michael", "significant_other": "Holley"},
            {"name": "Holley", "excluded_partner": "Michael"},
            {"name": "Toby"}
        ]"#;
        let people: Vec<Participant> = serde_json::from_str(json).unwrap();

        assert_eq!(people[0], Participant::with_partner("Michael", "Holley"));
        assert_eq!(people[1], Participant::with_partner("Holley", "Michael"));
        assert_eq!(people[2], Participant::new("Toby"));
    }
}
