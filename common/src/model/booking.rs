use super::status::{OpenStatus, ResponseStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingStatusCheck {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub booking: Option<BookingStatusData>,
}

/// Timestamps are kept as the ISO-8601 strings the booking service sends.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingStatusData {
    pub id: i32,
    pub configuration_booking_id: i32,
    pub init_booking: String,
    pub finish_booking: String,
    pub installation_name: String,
    pub number_locker: i32,
    pub device_id: String,
    pub current_code: String,
    pub openings: i32,
    pub service_name: String,
    pub email_recipient: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Last known state of a locker opening.
///
/// A successful value does not mean the locker opened: inspect `status` and
/// `open_status`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExecuteOpenResult {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub open_status: OpenStatus,
    /// The backend stream failed after this message was received.
    pub interrupted: bool,
}
