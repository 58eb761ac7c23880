use crate::domain::error::{AppError, Result};
use keyring::Entry;

pub struct KeyringManager {
    service: String,
}

impl KeyringManager {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    /// Reads a stored secret. A missing entry is `Ok(None)`; only platform
    /// store failures are errors.
    pub fn find_secret(&self, key: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, key)
            .map_err(|e| AppError::SecurityError(format!("Failed to create entry: {}", e)))?;

        match entry.get_password() {
            Ok(secret) if secret.trim().is_empty() => Ok(None),
            Ok(secret) => Ok(Some(secret)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AppError::SecurityError(format!(
                "Failed to read {}/{} from keyring: {}",
                self.service, key, e
            ))),
        }
    }
}
