use serde::Deserialize;
use thiserror::Error;

/// One entry of the Direct Link error envelope
/// (`{"errors": [{"code", "message", "more_info"?}], "trace"}`).
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub code: String,
    pub message: String,
    pub more_info: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorEnvelope {
    #[serde(default)]
    pub errors: Vec<ApiErrorDetail>,
    pub trace: Option<String>,
}

#[derive(Error, Debug)]
pub enum DirectLinkError {
    #[error("HTTP transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required parameter: {field}")]
    MissingParamError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidParamError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("API request failed with status {status}: {message}")]
    ApiResponseError {
        status: u16,
        message: String,
        trace: Option<String>,
        errors: Vec<ApiErrorDetail>,
    },
}

impl DirectLinkError {
    /// Build an API error from a non-2xx response body, falling back to the
    /// raw text when the body is not the standard error envelope.
    pub(crate) fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) if !envelope.errors.is_empty() => {
                let message = envelope
                    .errors
                    .iter()
                    .map(|e| e.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                DirectLinkError::ApiResponseError {
                    status,
                    message,
                    trace: envelope.trace,
                    errors: envelope.errors,
                }
            }
            _ => DirectLinkError::ApiResponseError {
                status,
                message: if body.trim().is_empty() {
                    "no error body".to_string()
                } else {
                    body.trim().to_string()
                },
                trace: None,
                errors: Vec::new(),
            },
        }
    }

    /// Status code of the failed API call, if this is an API error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            DirectLinkError::ApiResponseError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectLinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_parses_error_envelope() {
        let body = r#"{
            "errors": [
                {"code": "not_found", "message": "Cannot find Gateway"},
                {"code": "bad_field", "message": "speed_mbps invalid", "more_info": "https://cloud.ibm.com/apidocs"}
            ],
            "trace": "86b84ba2-76e8-44b5-a1d6-ce1ba809fcfd"
        }"#;

        let err = DirectLinkError::from_response(404, body);
        match err {
            DirectLinkError::ApiResponseError {
                status,
                message,
                trace,
                errors,
            } => {
                assert_eq!(status, 404);
                assert_eq!(message, "Cannot find Gateway; speed_mbps invalid");
                assert_eq!(trace.as_deref(), Some("86b84ba2-76e8-44b5-a1d6-ce1ba809fcfd"));
                assert_eq!(errors.len(), 2);
                assert_eq!(errors[0].code, "not_found");
                assert_eq!(
                    errors[1].more_info.as_deref(),
                    Some("https://cloud.ibm.com/apidocs")
                );
            }
            other => panic!("expected ApiResponseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_response_falls_back_to_raw_body() {
        let err = DirectLinkError::from_response(502, "Bad Gateway");
        match err {
            DirectLinkError::ApiResponseError {
                status,
                message,
                trace,
                errors,
            } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
                assert!(trace.is_none());
                assert!(errors.is_empty());
            }
            other => panic!("expected ApiResponseError, got {:?}", other),
        }
    }

    #[test]
    fn test_from_response_empty_body() {
        let err = DirectLinkError::from_response(500, "  ");
        assert_eq!(err.status_code(), Some(500));
        assert!(err.to_string().contains("no error body"));
    }
}
