//! Error types for the Proxy6 client

use crate::constants::error_code;

/// Errors surfaced by Proxy6 client operations
#[derive(Debug, thiserror::Error)]
pub enum Proxy6Error {
    /// Wrong proxies quantity, wrong amount or no quantity input (vendor code 200)
    #[error("wrong proxy quantity or amount")]
    Count,

    /// Zero or low balance on the account (vendor code 400)
    #[error("zero or too low balance")]
    NoMoney,

    /// Any other vendor rejection, with the code and description it reported
    #[error("{description} (code {code})")]
    Api { code: i64, description: String },

    #[error("request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Proxy6Error {
    /// Map a vendor `error_id` to the matching variant.
    pub(crate) fn select(code: i64, description: String) -> Self {
        match code {
            error_code::COUNT => Self::Count,
            error_code::NO_MONEY => Self::NoMoney,
            _ => Self::Api { code, description },
        }
    }

    /// Vendor error code, if this error came from the API itself.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Count => Some(error_code::COUNT),
            Self::NoMoney => Some(error_code::NO_MONEY),
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Proxy6Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Proxy6Error::Count;
        assert_eq!(err.to_string(), "wrong proxy quantity or amount");

        let err = Proxy6Error::NoMoney;
        assert_eq!(err.to_string(), "zero or too low balance");

        let err = Proxy6Error::Api {
            code: 100,
            description: "Error key".to_string(),
        };
        assert_eq!(err.to_string(), "Error key (code 100)");

        let err = Proxy6Error::RequestFailed {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request failed with status 502: bad gateway"
        );
    }

    #[test]
    fn test_select_known_codes() {
        assert!(matches!(
            Proxy6Error::select(200, "Error count".to_string()),
            Proxy6Error::Count
        ));
        assert!(matches!(
            Proxy6Error::select(400, "Error no money".to_string()),
            Proxy6Error::NoMoney
        ));
    }

    #[test]
    fn test_select_unknown_code() {
        let err = Proxy6Error::select(123, "Lorem ipsum".to_string());
        match err {
            Proxy6Error::Api { code, description } => {
                assert_eq!(code, 123);
                assert_eq!(description, "Lorem ipsum");
            }
            other => panic!("expected Api variant, got {other:?}"),
        }
    }

    #[test]
    fn test_vendor_code_accessor() {
        assert_eq!(Proxy6Error::Count.code(), Some(200));
        assert_eq!(Proxy6Error::NoMoney.code(), Some(400));
        assert_eq!(
            Proxy6Error::Api {
                code: 777,
                description: String::new()
            }
            .code(),
            Some(777)
        );
        assert_eq!(
            Proxy6Error::RequestFailed {
                status: 500,
                body: String::new()
            }
            .code(),
            None
        );
    }
}
