//! Roster file management module.
//!
//! A roster is a TOML file listing employee records:
//!
//! ```toml
//! [[employee]]
//! id = 101
//! first_name = "Sarah"
//! last_name = "Wilson"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::Employee;

/// Roster load result.
#[derive(Debug)]
pub enum RosterLoadResult {
    /// Roster loaded and every entry validated.
    Loaded(Vec<Employee>),
    /// Roster file missing.
    Missing,
    /// Roster file exists but invalid.
    Invalid(ConfigError),
}

/// Roster file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read roster file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse roster: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize roster: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

/// On-disk roster format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterFile {
    #[serde(default)]
    pub employee: Vec<RosterEntry>,
}

/// One roster entry, converted to an [`Employee`] on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl RosterFile {
    /// Attempt to load a roster with detailed result.
    pub fn try_load(path: &Path) -> RosterLoadResult {
        if !path.exists() {
            return RosterLoadResult::Missing;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RosterFile>(&content) {
                Ok(roster) => match roster.validate() {
                    Ok(employees) => RosterLoadResult::Loaded(employees),
                    Err(e) => RosterLoadResult::Invalid(e),
                },
                Err(e) => RosterLoadResult::Invalid(ConfigError::Parse(e)),
            },
            Err(e) => RosterLoadResult::Invalid(ConfigError::Read(e)),
        }
    }

    /// Validate every entry through the employee constructor.
    ///
    /// The first invalid entry fails the whole load, naming its position.
    pub fn validate(&self) -> Result<Vec<Employee>, ConfigError> {
        if self.employee.is_empty() {
            return Err(ConfigError::Validation("Roster contains no employees".to_string()));
        }

        self.employee
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                Employee::new(entry.id, entry.first_name.clone(), entry.last_name.clone())
                    .map_err(|e| ConfigError::Validation(format!("Entry {}: {}", idx + 1, e)))
            })
            .collect()
    }

    /// Save roster to file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// The roster used by the fixed demonstration script.
    pub fn sample() -> Self {
        Self {
            employee: vec![
                RosterEntry {
                    id: 101,
                    first_name: "Sarah".to_string(),
                    last_name: "Wilson".to_string(),
                },
                RosterEntry {
                    id: 101,
                    first_name: "Michael".to_string(),
                    last_name: "Brown".to_string(),
                },
                RosterEntry {
                    id: 102,
                    first_name: "Emma".to_string(),
                    last_name: "Davis".to_string(),
                },
            ],
        }
    }
}

/// Write the sample roster to `path`.
pub fn write_sample(path: &Path) -> Result<(), ConfigError> {
    RosterFile::sample().save(path)
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, RosterFile};

    #[test]
    fn test_parse_valid_roster() {
        let content = r#"
            [[employee]]
            id = 101
            first_name = "Sarah"
            last_name = "Wilson"

            [[employee]]
            id = 102
            first_name = "Emma"
            last_name = "Davis"
        "#;

        let roster: RosterFile = toml::from_str(content).unwrap();
        let employees = roster.validate().unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id(), 101);
        assert_eq!(employees[1].full_name(), "Emma Davis");
    }

    #[test]
    fn test_invalid_entry_fails_with_position() {
        let content = r#"
            [[employee]]
            id = 101
            first_name = "Sarah"
            last_name = "Wilson"

            [[employee]]
            id = -1
            first_name = "Invalid"
            last_name = "Employee"
        "#;

        let roster: RosterFile = toml::from_str(content).unwrap();
        match roster.validate() {
            Err(ConfigError::Validation(msg)) => {
                assert_eq!(msg, "Entry 2: Employee ID must be a positive number.");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_roster_is_invalid() {
        let roster: RosterFile = toml::from_str("").unwrap();
        assert!(matches!(roster.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_sample_round_trips() {
        let sample = RosterFile::sample();
        let content = toml::to_string_pretty(&sample).unwrap();
        let parsed: RosterFile = toml::from_str(&content).unwrap();

        let employees = parsed.validate().unwrap();
        assert_eq!(employees.len(), 3);
        assert_eq!(employees[0].full_name(), "Sarah Wilson");
        assert_eq!(employees[1].full_name(), "Michael Brown");
        assert_eq!(employees[2].full_name(), "Emma Davis");
    }
}
