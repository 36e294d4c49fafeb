use crate::utils::error::{DirectLinkError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DirectLinkError::InvalidParamError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DirectLinkError::InvalidParamError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DirectLinkError::InvalidParamError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// The `version` query parameter is a date, e.g. `2024-10-30`.
pub fn validate_version_date(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|e| {
        DirectLinkError::InvalidParamError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected YYYY-MM-DD date: {}", e),
        }
    })?;
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DirectLinkError::InvalidParamError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DirectLinkError::InvalidParamError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| DirectLinkError::MissingParamError {
            field: field_name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://directlink.cloud.ibm.com/v1").is_ok());
        assert!(validate_url("base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "not-a-url").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_version_date() {
        assert!(validate_version_date("version", "2024-10-30").is_ok());
        assert!(validate_version_date("version", "2024-13-01").is_err());
        assert!(validate_version_date("version", "20241030").is_err());
        assert!(validate_version_date("version", "").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("gateway_id", "abc123").is_ok());
        assert!(validate_non_empty_string("gateway_id", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("limit", 50, 1, 100).is_ok());
        assert!(validate_range("limit", 0, 1, 100).is_err());
        assert!(validate_range("limit", 101, 1, 100).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let some: Option<String> = Some("value".to_string());
        let none: Option<String> = None;
        assert_eq!(validate_required_field("name", &some).unwrap(), "value");
        assert!(validate_required_field("name", &none).is_err());
    }
}
