//! External response shapes, as serialized to clients.
//!
//! Field names are camelCase. Enums travel as SCREAMING strings; any string a
//! client sends back that is not recognised reads as the unspecified member.

use serde::{Deserialize, Serialize, Serializer};

use paybff_common::{DomainError, ErrorKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum ResponseStatus {
    #[default]
    #[serde(rename = "RESPONSE_STATUS_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "RESPONSE_STATUS_OK")]
    Ok,
    #[serde(rename = "RESPONSE_STATUS_ERROR")]
    Error,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Unspecified => "RESPONSE_STATUS_UNSPECIFIED",
            ResponseStatus::Ok => "RESPONSE_STATUS_OK",
            ResponseStatus::Error => "RESPONSE_STATUS_ERROR",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "RESPONSE_STATUS_OK" => ResponseStatus::Ok,
            "RESPONSE_STATUS_ERROR" => ResponseStatus::Error,
            _ => ResponseStatus::Unspecified,
        }
    }
}

impl From<String> for ResponseStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitMeasurement {
    #[default]
    Unspecified,
    Hour,
    Day,
    Week,
    Month,
}

impl UnitMeasurement {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitMeasurement::Unspecified => "UNSPECIFIED",
            UnitMeasurement::Hour => "HOUR",
            UnitMeasurement::Day => "DAY",
            UnitMeasurement::Week => "WEEK",
            UnitMeasurement::Month => "MONTH",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "HOUR" => UnitMeasurement::Hour,
            "DAY" => UnitMeasurement::Day,
            "WEEK" => UnitMeasurement::Week,
            "MONTH" => UnitMeasurement::Month,
            _ => UnitMeasurement::Unspecified,
        }
    }
}

impl From<String> for UnitMeasurement {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum OpenStatus {
    #[default]
    #[serde(rename = "OPEN_STATUS_UNSPECIFIED")]
    Unspecified,
    #[serde(rename = "OPEN_STATUS_RECEIVED")]
    Received,
    #[serde(rename = "OPEN_STATUS_REQUESTED")]
    Requested,
    #[serde(rename = "OPEN_STATUS_EXECUTED")]
    Executed,
    #[serde(rename = "OPEN_STATUS_ERROR")]
    Error,
    #[serde(rename = "OPEN_STATUS_SUCCESS")]
    Success,
}

impl OpenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenStatus::Unspecified => "OPEN_STATUS_UNSPECIFIED",
            OpenStatus::Received => "OPEN_STATUS_RECEIVED",
            OpenStatus::Requested => "OPEN_STATUS_REQUESTED",
            OpenStatus::Executed => "OPEN_STATUS_EXECUTED",
            OpenStatus::Error => "OPEN_STATUS_ERROR",
            OpenStatus::Success => "OPEN_STATUS_SUCCESS",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "OPEN_STATUS_RECEIVED" => OpenStatus::Received,
            "OPEN_STATUS_REQUESTED" => OpenStatus::Requested,
            "OPEN_STATUS_EXECUTED" => OpenStatus::Executed,
            "OPEN_STATUS_ERROR" => OpenStatus::Error,
            "OPEN_STATUS_SUCCESS" => OpenStatus::Success,
            _ => OpenStatus::Unspecified,
        }
    }
}

impl From<String> for OpenStatus {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfraResponse {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub payment_rack: Option<PaymentRack>,
    pub installation: Option<PaymentInstallation>,
    pub booking_times: Vec<PaymentBookingTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRack {
    pub id: i32,
    pub description: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInstallation {
    pub id: i32,
    pub name: String,
    pub region: String,
    pub city: String,
    pub address: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBookingTime {
    pub id: i32,
    pub name: String,
    pub unit_measurement: UnitMeasurement,
    pub amount: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableLockersResponse {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub available_groups: Vec<AvailablePaymentGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePaymentGroup {
    pub group_id: i32,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDiscountCouponResponse {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub discount_percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePurchaseOrderResponse {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBookingResponse {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderResponse {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
    pub purchase_order_data: Option<PurchaseOrderData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderData {
    pub coupon_id: i32,
    pub booking_reference: i32,
    pub oc: String,
    pub email: String,
    pub phone: String,
    pub discount: i32,
    pub product_price: i32,
    /// Decimal string: the amount may exceed what JSON clients read safely.
    pub final_product_price: String,
    pub product_name: String,
    pub product_description: String,
    pub locker_position: i32,
    pub installation_name: String,
    pub device_serie_num: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckBookingStatusResponse {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub booking: Option<BookingStatusData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
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

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteOpenResponse {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub open_status: OpenStatus,
    /// Set when the backend stream broke after this state was reported.
    pub interrupted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

impl HealthResponse {
    pub fn pong() -> Self {
        Self {
            message: "pong".to_string(),
        }
    }
}

/// How a failed operation is rendered to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    #[serde(serialize_with = "kind_name")]
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    pub retryable: bool,
}

fn kind_name<S: Serializer>(kind: &ErrorKind, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(kind.as_str())
}

impl From<&DomainError> for ErrorBody {
    fn from(error: &DomainError) -> Self {
        Self {
            kind: error.kind(),
            code: error.code().to_string(),
            message: error.to_string(),
            retryable: error.is_retryable(),
        }
    }
}
