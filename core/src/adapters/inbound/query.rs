//! Named operations over JSON.
//!
//! A request is `{"operation": <name>, "arguments": {...}}`; the answer is
//! either `{"data": ...}` or `{"error": {kind, code, message, retryable}}`.
//! Missing arguments read as empty, so they fail validation with the name of
//! the field rather than as a malformed document.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use paybff_common::{DomainError, ErrorKind};

use super::mapper;
use super::schema::{
    AvailableLockersResponse, CheckBookingStatusResponse, ErrorBody, ExecuteOpenResponse,
    GenerateBookingResponse, GeneratePurchaseOrderResponse, HealthResponse, PaymentInfraResponse,
    PurchaseOrderResponse, ValidateDiscountCouponResponse,
};
use crate::application::services::locker_access::LockerAccessService;
use crate::application::services::payment_infra::{CheckoutArgs, PaymentInfraService};
use crate::ports::outbound::{BookingGateway, PaymentGateway};

/// Every operation name, in the order they are documented.
pub const NAMES: [&str; 8] = [
    "getPaymentInfraByQrValue",
    "getAvailableLockers",
    "validateDiscountCoupon",
    "generatePurchaseOrder",
    "generateBooking",
    "getPurchaseOrderByPo",
    "checkBookingStatus",
    "executeOpen",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrArgs {
    pub qr_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LockersArgs {
    pub rack_id: i64,
    pub booking_time_id: i64,
    pub trace_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CouponArgs {
    pub coupon_code: String,
    pub rack_id: i64,
    pub trace_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PurchaseOrderArgs {
    pub rack_id_reference: i64,
    pub group_id: i64,
    pub coupon_code: Option<String>,
    pub email: String,
    pub phone: String,
    pub trace_id: String,
    pub gateway_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingArgs {
    pub rack_id_reference: i64,
    pub group_id: i64,
    pub coupon_code: Option<String>,
    pub email: String,
    pub phone: String,
    pub trace_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderLookupArgs {
    pub purchase_order: String,
    pub trace_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LockerArgs {
    pub service_name: String,
    pub current_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    GetPaymentInfraByQrValue(QrArgs),
    GetAvailableLockers(LockersArgs),
    ValidateDiscountCoupon(CouponArgs),
    GeneratePurchaseOrder(PurchaseOrderArgs),
    GenerateBooking(BookingArgs),
    GetPurchaseOrderByPo(OrderLookupArgs),
    CheckBookingStatus(LockerArgs),
    ExecuteOpen(LockerArgs),
}

#[derive(Debug, Deserialize)]
struct Document {
    operation: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("malformed request: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("unknown operation `{0}`")]
    UnknownOperation(String),

    #[error("malformed arguments for `{operation}`: {source}")]
    Arguments {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn arguments<T>(operation: &'static str, raw: Value) -> Result<T, QueryError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if raw.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(raw).map_err(|source| QueryError::Arguments { operation, source })
}

impl Query {
    pub fn from_value(document: Value) -> Result<Self, QueryError> {
        let Document {
            operation,
            arguments: raw,
        } = serde_json::from_value(document).map_err(QueryError::Malformed)?;

        let query = match operation.as_str() {
            "getPaymentInfraByQrValue" => {
                Query::GetPaymentInfraByQrValue(arguments("getPaymentInfraByQrValue", raw)?)
            }
            "getAvailableLockers" => Query::GetAvailableLockers(arguments("getAvailableLockers", raw)?),
            "validateDiscountCoupon" => {
                Query::ValidateDiscountCoupon(arguments("validateDiscountCoupon", raw)?)
            }
            "generatePurchaseOrder" => {
                Query::GeneratePurchaseOrder(arguments("generatePurchaseOrder", raw)?)
            }
            "generateBooking" => Query::GenerateBooking(arguments("generateBooking", raw)?),
            "getPurchaseOrderByPo" => {
                Query::GetPurchaseOrderByPo(arguments("getPurchaseOrderByPo", raw)?)
            }
            "checkBookingStatus" => Query::CheckBookingStatus(arguments("checkBookingStatus", raw)?),
            "executeOpen" => Query::ExecuteOpen(arguments("executeOpen", raw)?),
            _ => return Err(QueryError::UnknownOperation(operation)),
        };
        Ok(query)
    }

    pub fn parse(text: &str) -> Result<Self, QueryError> {
        let document = serde_json::from_str(text).map_err(QueryError::Malformed)?;
        Self::from_value(document)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Query::GetPaymentInfraByQrValue(_) => NAMES[0],
            Query::GetAvailableLockers(_) => NAMES[1],
            Query::ValidateDiscountCoupon(_) => NAMES[2],
            Query::GeneratePurchaseOrder(_) => NAMES[3],
            Query::GenerateBooking(_) => NAMES[4],
            Query::GetPurchaseOrderByPo(_) => NAMES[5],
            Query::CheckBookingStatus(_) => NAMES[6],
            Query::ExecuteOpen(_) => NAMES[7],
        }
    }
}

/// Successful payload of any operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryData {
    PaymentInfra(PaymentInfraResponse),
    AvailableLockers(AvailableLockersResponse),
    CouponValidation(ValidateDiscountCouponResponse),
    PurchaseOrder(GeneratePurchaseOrderResponse),
    Booking(GenerateBookingResponse),
    PurchaseOrderData(PurchaseOrderResponse),
    BookingStatus(CheckBookingStatusResponse),
    OpenResult(ExecuteOpenResponse),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Data(Option<QueryData>),
    Error(ErrorBody),
}

impl Outcome {
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Data(_) => None,
            Outcome::Error(body) => Some(body.kind),
        }
    }
}

impl From<&QueryError> for ErrorBody {
    fn from(error: &QueryError) -> Self {
        let code = match error {
            QueryError::Malformed(_) => "MALFORMED_REQUEST",
            QueryError::UnknownOperation(_) => "UNKNOWN_OPERATION",
            QueryError::Arguments { .. } => "MALFORMED_ARGUMENTS",
        };
        Self {
            kind: ErrorKind::InvalidInput,
            code: code.to_string(),
            message: error.to_string(),
            retryable: false,
        }
    }
}

/// The operation surface shared by every inbound transport.
#[derive(Clone)]
pub struct Api {
    payment: Arc<PaymentInfraService>,
    lockers: Arc<LockerAccessService>,
}

impl Api {
    pub fn new(payment: Arc<dyn PaymentGateway>, booking: Arc<dyn BookingGateway>) -> Self {
        Self {
            payment: Arc::new(PaymentInfraService::new(payment)),
            lockers: Arc::new(LockerAccessService::new(booking)),
        }
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse::pong()
    }

    pub async fn execute(&self, query: Query) -> Result<Option<QueryData>, DomainError> {
        let data = match query {
            Query::GetPaymentInfraByQrValue(args) => {
                let infra = self
                    .payment
                    .get_payment_infra_by_qr_value(&args.qr_value)
                    .await?;
                mapper::payment_infra(Some(&infra)).map(QueryData::PaymentInfra)
            }
            Query::GetAvailableLockers(args) => {
                let lockers = self
                    .payment
                    .get_available_lockers(args.rack_id, args.booking_time_id, &args.trace_id)
                    .await?;
                mapper::available_lockers(Some(&lockers)).map(QueryData::AvailableLockers)
            }
            Query::ValidateDiscountCoupon(args) => {
                let validation = self
                    .payment
                    .validate_discount_coupon(&args.coupon_code, args.rack_id, &args.trace_id)
                    .await?;
                mapper::coupon_validation(Some(&validation)).map(QueryData::CouponValidation)
            }
            Query::GeneratePurchaseOrder(args) => {
                let checkout = CheckoutArgs {
                    rack_id_reference: args.rack_id_reference,
                    group_id: args.group_id,
                    coupon_code: args.coupon_code,
                    email: args.email,
                    phone: args.phone,
                    trace_id: args.trace_id,
                };
                let order = self
                    .payment
                    .generate_purchase_order(&checkout, &args.gateway_name)
                    .await?;
                mapper::purchase_order(Some(&order)).map(QueryData::PurchaseOrder)
            }
            Query::GenerateBooking(args) => {
                let checkout = CheckoutArgs {
                    rack_id_reference: args.rack_id_reference,
                    group_id: args.group_id,
                    coupon_code: args.coupon_code,
                    email: args.email,
                    phone: args.phone,
                    trace_id: args.trace_id,
                };
                let booking = self.payment.generate_booking(&checkout).await?;
                mapper::booking(Some(&booking)).map(QueryData::Booking)
            }
            Query::GetPurchaseOrderByPo(args) => {
                let order = self
                    .payment
                    .get_purchase_order_by_po(&args.purchase_order, &args.trace_id)
                    .await?;
                mapper::purchase_order_data(Some(&order)).map(QueryData::PurchaseOrderData)
            }
            Query::CheckBookingStatus(args) => {
                let check = self
                    .lockers
                    .check_booking_status(&args.service_name, &args.current_code)
                    .await?;
                mapper::booking_status(Some(&check)).map(QueryData::BookingStatus)
            }
            Query::ExecuteOpen(args) => {
                let result = self
                    .lockers
                    .execute_open(&args.service_name, &args.current_code)
                    .await?;
                mapper::open_result(Some(&result)).map(QueryData::OpenResult)
            }
        };
        Ok(data)
    }

    /// Like [`Api::handle`], for a document that has not been parsed yet.
    pub async fn handle_text(&self, text: &str) -> Outcome {
        match serde_json::from_str(text) {
            Ok(document) => self.handle(document).await,
            Err(error) => {
                let error = QueryError::Malformed(error);
                warn!(%error, "Rejected request");
                Outcome::Error(ErrorBody::from(&error))
            }
        }
    }

    /// Parses, runs and renders one request document.
    pub async fn handle(&self, document: Value) -> Outcome {
        let query = match Query::from_value(document) {
            Ok(query) => query,
            Err(error) => {
                warn!(%error, "Rejected request");
                return Outcome::Error(ErrorBody::from(&error));
            }
        };

        let operation = query.name();
        match self.execute(query).await {
            Ok(data) => {
                info!(operation, "Operation completed");
                Outcome::Data(data)
            }
            Err(error) => {
                info!(operation, code = error.code(), "Operation failed");
                Outcome::Error(ErrorBody::from(&error))
            }
        }
    }
}
