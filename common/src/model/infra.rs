use super::status::{ResponseStatus, UnitMeasurement};

/// Payment infrastructure resolved from the QR code printed on a rack.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaymentInfra {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    /// Expected whenever `status` is OK, but never relied upon.
    pub payment_rack: Option<PaymentRack>,
    pub installation: Option<Installation>,
    pub booking_times: Vec<BookingTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaymentRack {
    pub id: i32,
    pub description: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Installation {
    pub id: i32,
    pub name: String,
    pub region: String,
    pub city: String,
    pub address: String,
    pub image_url: String,
}

/// A rental-duration tier, e.g. "3 days".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookingTime {
    pub id: i32,
    pub name: String,
    pub unit_measurement: UnitMeasurement,
    pub amount: i32,
}
