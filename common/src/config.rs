use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} address must not be empty")]
    EmptyAddress(&'static str),
    #[error("backend timeout must be greater than zero")]
    ZeroTimeout,
}

/// Everything the backend adapters need to know about the two downstream services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    /// `host:port` of the payment/infrastructure service.
    pub payment_service_address: String,
    /// `host:port` of the booking service.
    pub booking_service_address: String,
    /// Upper bound for every single backend call, streaming calls included.
    pub timeout: Duration,
    /// Serve canned responses instead of connecting.
    ///
    /// Addresses are still validated but never dialed.
    pub offline: bool,
}

impl BackendConfig {
    pub fn offline() -> Self {
        Self {
            payment_service_address: "localhost:50051".to_string(),
            booking_service_address: "localhost:50052".to_string(),
            timeout: DEFAULT_TIMEOUT,
            offline: true,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.payment_service_address.trim().is_empty() {
            return Err(ConfigError::EmptyAddress("payment service"));
        }
        if self.booking_service_address.trim().is_empty() {
            return Err(ConfigError::EmptyAddress("booking service"));
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

/// Joins a host and a port the way the deployment environment provides them.
pub fn join_address(host: &str, port: u16) -> String {
    format!("{}:{}", host.trim(), port)
}
