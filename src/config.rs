// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Where the roster comes from.
//!
//! A roster file is a JSON array of participants:
//!
//! ```json
//! [
//!   { "name": "Jim", "excluded_partner": "Pam" },
//!   { "name": "Pam", "excluded_partner": "Jim" },
//!   { "name": "Dwight" }
//! ]
//! ```
//!
//! `significant_other` is accepted in place of `excluded_partner`.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ConfigError;
use crate::roster::{Participant, Roster};

/// Parse and validate a roster from JSON text.
pub fn parse_roster(json: &str, path: &Path) -> Result<Roster, ConfigError> {
    let participants: Vec<Participant> =
        serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Roster::new(participants)?)
}

/// Read, parse and validate a roster file.
pub fn load_roster(path: &Path) -> Result<Roster, ConfigError> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let roster = parse_roster(&json, path)?;
    debug!(path = %path.display(), participants = roster.len(), "Loaded roster");
    Ok(roster)
}

/// The built-in office roster: two couples and eleven singles.
pub fn default_participants() -> Vec<Participant> {
    vec![
        Participant::with_partner("Michael", "Holley"),
        Participant::with_partner("Holley", "Michael"),
        Participant::with_partner("Jim", "Pam"),
        Participant::with_partner("Pam", "Jim"),
        Participant::new("Phillis"),
        Participant::new("Kevin"),
        Participant::new("Dwight"),
        Participant::new("Angela"),
        Participant::new("Oscar"),
        Participant::new("Toby"),
        Participant::new("Kelly"),
        Participant::new("Ryan"),
        Participant::new("Stanley"),
        Participant::new("Meredith"),
        Participant::new("Creed"),
    ]
}

pub fn default_roster() -> Roster {
    // The built-in list has unique names and known partners
    match Roster::new(default_participants()) {
        Ok(roster) => roster,
        Err(e) => unreachable!("built-in roster is invalid: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;

    #[test]
    fn test_default_roster() {
        let roster = default_roster();
        assert_eq!(roster.len(), 15);
        assert!(roster.excludes("Michael", "Holley"));
        assert!(roster.excludes("Pam", "Jim"));
        assert!(!roster.excludes("Jim", "Holley"));
    }

    #[test]
    fn test_parse_roster() {
        let json = r#"[
            {"name": "Jim", "significant_other": "Pam"},
            {"name": "Pam", "excluded_partner": "Jim"},
            {"name": "Dwight"}
        ]"#;
        let roster = parse_roster(json, Path::new("office.json")).unwrap();
        assert_eq!(roster.len(), 3);
        assert!(roster.excludes("Jim", "Pam"));
    }

    #[test]
    fn test_parse_roster_bad_json() {
        let result = parse_roster("[{\"nome\": 1}]", Path::new("bad.json"));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_parse_roster_invalid_roster() {
        let json = r#"[{"name": "Jim", "excluded_partner": "Karen"}]"#;
        let result = parse_roster(json, Path::new("office.json"));
        assert!(matches!(
            result,
            Err(ConfigError::Roster(RosterError::UnknownPartner { .. }))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_roster(Path::new("/nonexistent/roster.json"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
