use crate::domain::model::Person;
use crate::utils::error::{Result, RouletteError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RouletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RouletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RouletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// A file prefix ends up inside generated file names, so it must not carry path separators.
pub fn validate_file_prefix(field_name: &str, prefix: &str) -> Result<()> {
    validate_non_empty_string(field_name, prefix)?;

    if prefix.contains(['/', '\\']) {
        return Err(RouletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: prefix.to_string(),
            reason: "Prefix cannot contain path separators".to_string(),
        });
    }
    Ok(())
}

/// Rejects rosters the pairing engine cannot turn into teams: a single
/// person, or the same name listed twice. An empty roster is accepted and
/// yields a run with no groups.
pub fn validate_roster(roster: &[Person]) -> Result<()> {
    if let [only] = roster {
        return Err(RouletteError::ValidationError {
            message: format!("'{}' is the only person on the roster, nobody to pair with", only),
        });
    }

    let mut seen = HashSet::with_capacity(roster.len());
    for person in roster {
        if !seen.insert(person.as_str()) {
            return Err(RouletteError::ValidationError {
                message: format!("duplicate name '{}'", person),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Vec<Person> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("artifacts_dir", ".").is_ok());
        assert!(validate_path("artifacts_dir", "").is_err());
        assert!(validate_path("artifacts_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_prefix() {
        assert!(validate_file_prefix("prefix", "assigned_pairs_run_").is_ok());
        assert!(validate_file_prefix("prefix", "  ").is_err());
        assert!(validate_file_prefix("prefix", "../escape_").is_err());
    }

    #[test]
    fn test_validate_roster() {
        assert!(validate_roster(&roster(&["Alice", "Bob"])).is_ok());
        assert!(validate_roster(&roster(&["Alice"])).is_err());
        assert!(validate_roster(&roster(&[])).is_ok());

        let err = validate_roster(&roster(&["Alice", "Bob", "Alice"])).unwrap_err();
        assert!(err.to_string().contains("duplicate name 'Alice'"));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(validate_roster(&roster(&["alice", "Alice"])).is_ok());
    }
}
