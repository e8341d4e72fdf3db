use super::status::ResponseStatus;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailableLockers {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub available_groups: Vec<AvailablePaymentGroup>,
}

/// A group of identical lockers sharing a price.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AvailablePaymentGroup {
    pub group_id: i32,
    pub name: String,
    /// In currency units, as quoted by the payment service.
    pub price: f64,
    pub description: String,
    pub image_url: String,
}
