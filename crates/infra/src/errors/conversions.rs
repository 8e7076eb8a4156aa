//! Conversions from external infrastructure errors into domain errors.

use keyring::Error as KeyringError;
use promohub_domain::PromoHubError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub PromoHubError);

impl From<InfraError> for PromoHubError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<PromoHubError> for InfraError {
    fn from(value: PromoHubError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoPromoHubError {
    fn into_promohub(self) -> PromoHubError;
}

/* -------------------------------------------------------------------------- */
/* keyring::Error → PromoHubError */
/* -------------------------------------------------------------------------- */

impl IntoPromoHubError for KeyringError {
    fn into_promohub(self) -> PromoHubError {
        let description = self.to_string();

        match self {
            KeyringError::NoEntry => PromoHubError::Storage("keychain entry not found".into()),
            KeyringError::BadEncoding(_) => {
                PromoHubError::Storage("credential in keychain is not valid UTF-8".into())
            }
            KeyringError::TooLong(name, limit) => PromoHubError::Storage(format!(
                "keychain attribute '{name}' exceeds platform limit ({limit})"
            )),
            KeyringError::PlatformFailure(err) => {
                PromoHubError::Storage(format!("keychain platform error: {err}"))
            }
            KeyringError::NoStorageAccess(err) => {
                PromoHubError::Storage(format!("unable to access secure storage: {err}"))
            }
            _ => PromoHubError::Storage(description),
        }
    }
}

impl From<KeyringError> for InfraError {
    fn from(value: KeyringError) -> Self {
        InfraError(value.into_promohub())
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → PromoHubError */
/* -------------------------------------------------------------------------- */

impl IntoPromoHubError for HttpError {
    fn into_promohub(self) -> PromoHubError {
        if self.is_builder() {
            return PromoHubError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_timeout() {
            return PromoHubError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return PromoHubError::Network("HTTP connection failure".into());
        }

        if let Some(status) = self.status() {
            return PromoHubError::Network(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        PromoHubError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_promohub())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error / std::io::Error → PromoHubError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(PromoHubError::Serialization(value.to_string()))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(PromoHubError::Storage(value.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
