use super::status::ResponseStatus;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscountCouponValidation {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    /// Between 0 and 100.
    pub discount_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseOrder {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    /// Where the client has to be redirected to pay.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Booking {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub code: String,
}

/// A purchase order as stored by the payment service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PurchaseOrderData {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub coupon_id: i32,
    pub booking_reference: i32,
    /// The order code ("OC") issued by the gateway.
    pub order_code: String,
    pub email: String,
    pub phone: String,
    pub discount: i32,
    pub product_price: i32,
    pub final_product_price: i64,
    pub product_name: String,
    pub product_description: String,
    pub locker_position: i32,
    pub installation_name: String,
    pub device_serial: String,
    /// Free-form, owned by the payment service (e.g. "PAID").
    pub order_status: String,
}
