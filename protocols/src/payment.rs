//! Messages of `paymentmanager.v1.PaymentManagerService`.

/// Envelope present in every payment and booking response.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PaymentManagerGenericResponse {
    #[prost(string, tag = "1")]
    pub transaction_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub message: ::prost::alloc::string::String,
    #[prost(enumeration = "ResponseStatus", tag = "3")]
    pub status: i32,
    #[prost(string, tag = "4")]
    pub trace_id: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum ResponseStatus {
    Unspecified = 0,
    Ok = 1,
    Error = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum UnitMeasurement {
    Unspecified = 0,
    Hour = 1,
    Day = 2,
    Week = 3,
    Month = 4,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPaymentInfraByQrValueRequest {
    #[prost(string, tag = "1")]
    pub qr_value: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPaymentInfraByQrValueResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<PaymentManagerGenericResponse>,
    #[prost(message, optional, tag = "2")]
    pub payment_rack: ::core::option::Option<RackRecord>,
    #[prost(message, optional, tag = "3")]
    pub installation: ::core::option::Option<InstallationRecord>,
    #[prost(message, repeated, tag = "4")]
    pub booking_times: ::prost::alloc::vec::Vec<BookingTimeRecord>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RackRecord {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub address: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct InstallationRecord {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub region: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub city: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub address: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub image_url: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BookingTimeRecord {
    #[prost(int32, tag = "1")]
    pub id: i32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(enumeration = "UnitMeasurement", tag = "3")]
    pub unit_measurement: i32,
    #[prost(int32, tag = "4")]
    pub amount: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAvailableLockersRequest {
    #[prost(int32, tag = "1")]
    pub payment_rack_id: i32,
    #[prost(int32, tag = "2")]
    pub booking_time_id: i32,
    #[prost(string, tag = "3")]
    pub trace_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAvailableLockersResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<PaymentManagerGenericResponse>,
    #[prost(message, repeated, tag = "2")]
    pub available_groups: ::prost::alloc::vec::Vec<AvailablePaymentGroupRecord>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AvailablePaymentGroupRecord {
    #[prost(int32, tag = "1")]
    pub group_id: i32,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
    #[prost(double, tag = "3")]
    pub price: f64,
    #[prost(string, tag = "4")]
    pub description: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub image_url: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateDiscountCouponRequest {
    #[prost(string, tag = "1")]
    pub coupon_code: ::prost::alloc::string::String,
    #[prost(int32, tag = "2")]
    pub rack_id: i32,
    #[prost(string, tag = "3")]
    pub trace_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ValidateDiscountCouponResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<PaymentManagerGenericResponse>,
    #[prost(double, tag = "2")]
    pub discount_percentage: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeneratePurchaseOrderRequest {
    #[prost(int32, tag = "1")]
    pub rack_id_reference: i32,
    #[prost(int32, tag = "2")]
    pub group_id: i32,
    #[prost(string, optional, tag = "3")]
    pub coupon_code: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, tag = "4")]
    pub user_email: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub user_phone: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub trace_id: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub gateway_name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeneratePurchaseOrderResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<PaymentManagerGenericResponse>,
    #[prost(string, tag = "2")]
    pub url: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateBookingRequest {
    #[prost(int32, tag = "1")]
    pub rack_id_reference: i32,
    #[prost(int32, tag = "2")]
    pub group_id: i32,
    #[prost(string, optional, tag = "3")]
    pub coupon_code: ::core::option::Option<::prost::alloc::string::String>,
    #[prost(string, tag = "4")]
    pub user_email: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub user_phone: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub trace_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenerateBookingResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<PaymentManagerGenericResponse>,
    #[prost(string, tag = "2")]
    pub code: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPurchaseOrderByPoRequest {
    #[prost(string, tag = "1")]
    pub purchase_order: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub trace_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetPurchaseOrderByPoResponse {
    #[prost(message, optional, tag = "1")]
    pub response: ::core::option::Option<PaymentManagerGenericResponse>,
    #[prost(message, optional, tag = "2")]
    pub purchase_order: ::core::option::Option<PurchaseOrderRecord>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PurchaseOrderRecord {
    #[prost(int32, tag = "1")]
    pub coupon_id: i32,
    #[prost(int32, tag = "2")]
    pub booking_reference: i32,
    #[prost(string, tag = "3")]
    pub oc: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub email: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub phone: ::prost::alloc::string::String,
    #[prost(int32, tag = "6")]
    pub discount: i32,
    #[prost(int32, tag = "7")]
    pub product_price: i32,
    #[prost(int64, tag = "8")]
    pub final_product_price: i64,
    #[prost(string, tag = "9")]
    pub product_name: ::prost::alloc::string::String,
    #[prost(string, tag = "10")]
    pub product_description: ::prost::alloc::string::String,
    #[prost(int32, tag = "11")]
    pub locker_position: i32,
    #[prost(string, tag = "12")]
    pub installation_name: ::prost::alloc::string::String,
    #[prost(string, tag = "13")]
    pub device_serie_num: ::prost::alloc::string::String,
    #[prost(string, tag = "14")]
    pub status: ::prost::alloc::string::String,
}
