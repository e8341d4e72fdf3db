//! # Domain Error Taxonomy
//!
//! Every operation of the BFF fails with one of the variants of [`DomainError`].
//! Variants are grouped into four stable [`ErrorKind`]s, which is what callers
//! should branch on:
//!
//! * **Invalid input**: the caller sent something missing or malformed.
//! * **Service unavailable**: a backend could not be reached or answered garbage.
//! * **Not found**: a backend explicitly reported that the entity does not exist.
//! * **Operation failed**: a backend explicitly rejected the operation.
//!
//! Raw transport errors never appear here; the outbound adapters translate them.

use std::fmt;

use thiserror::Error;

/// Coarse classification of a [`DomainError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    ServiceUnavailable,
    NotFound,
    OperationFailed,
}

impl ErrorKind {
    /// Machine-readable identifier rendered to external clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::OperationFailed => "OPERATION_FAILED",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A caller-supplied argument is missing or malformed.
    #[error("invalid input: {field}")]
    InvalidInput { field: &'static str },

    /// The backend rejected the payment rack identifier.
    #[error("invalid payment rack ID")]
    InvalidPaymentRackId,

    #[error("payment infrastructure service unavailable")]
    ServiceUnavailable,

    #[error("payment rack not found")]
    PaymentRackNotFound,

    #[error("purchase order not found")]
    PurchaseOrderNotFound,

    #[error("booking not found")]
    BookingNotFound,

    #[error("no lockers available")]
    NoLockersAvailable,

    #[error("invalid discount coupon")]
    InvalidCoupon,

    #[error("purchase order generation failed")]
    PurchaseOrderGenerationFailed,

    #[error("booking generation failed")]
    BookingGenerationFailed,

    #[error("locker opening failed")]
    ExecuteOpenFailed,
}

impl DomainError {
    pub fn invalid_input(field: &'static str) -> Self {
        DomainError::InvalidInput { field }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::InvalidInput { .. } | DomainError::InvalidPaymentRackId => {
                ErrorKind::InvalidInput
            }
            DomainError::ServiceUnavailable => ErrorKind::ServiceUnavailable,
            DomainError::PaymentRackNotFound
            | DomainError::PurchaseOrderNotFound
            | DomainError::BookingNotFound => ErrorKind::NotFound,
            DomainError::NoLockersAvailable
            | DomainError::InvalidCoupon
            | DomainError::PurchaseOrderGenerationFailed
            | DomainError::BookingGenerationFailed
            | DomainError::ExecuteOpenFailed => ErrorKind::OperationFailed,
        }
    }

    /// Stable per-variant code, e.g. `BOOKING_NOT_FOUND`.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidInput { .. } => "INVALID_INPUT",
            DomainError::InvalidPaymentRackId => "INVALID_PAYMENT_RACK_ID",
            DomainError::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            DomainError::PaymentRackNotFound => "PAYMENT_RACK_NOT_FOUND",
            DomainError::PurchaseOrderNotFound => "PURCHASE_ORDER_NOT_FOUND",
            DomainError::BookingNotFound => "BOOKING_NOT_FOUND",
            DomainError::NoLockersAvailable => "NO_LOCKERS_AVAILABLE",
            DomainError::InvalidCoupon => "INVALID_COUPON",
            DomainError::PurchaseOrderGenerationFailed => "PURCHASE_ORDER_GENERATION_FAILED",
            DomainError::BookingGenerationFailed => "BOOKING_GENERATION_FAILED",
            DomainError::ExecuteOpenFailed => "EXECUTE_OPEN_FAILED",
        }
    }

    /// Only unavailability is worth retrying; every other kind is a definitive answer.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::ServiceUnavailable
    }
}
