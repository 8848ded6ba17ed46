use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(CalcError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Unsupported value. Valid values: {}", allowed.join(", ")),
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CalcError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("sink.path", "./calculations.log").is_ok());
        assert!(validate_path("sink.path", "").is_err());
        assert!(validate_path("sink.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("sink.format", "jsonl", &["plain", "jsonl"]).is_ok());
        assert!(validate_one_of("sink.format", "xml", &["plain", "jsonl"]).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("info".to_string());
        assert_eq!(validate_required_field("logging.level", &present).unwrap(), "info");

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("logging.level", &missing),
            Err(CalcError::MissingConfigError { .. })
        ));
    }
}
