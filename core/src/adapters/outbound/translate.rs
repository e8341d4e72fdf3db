//! Wire → domain translation shared by the gateway adapters.
//!
//! Three things happen here: transport failures become [`DomainError`]s, the
//! response envelope is checked, and protocol records become domain values.
//! Wire enums arrive as raw integers and are bounds-checked on the way in.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tonic::{Code, Status};
use tracing::{error, warn};

use paybff_common::DomainError;
use paybff_common::model::{
    AvailablePaymentGroup, BookingStatusData, BookingTime, Installation, OpenStatus, PaymentRack,
    PurchaseOrderData, ResponseStatus, UnitMeasurement,
};
use paybff_protocols::booking::{self as wire_booking, BookingStatusRecord};
use paybff_protocols::payment::{
    self as wire, AvailablePaymentGroupRecord, BookingTimeRecord, InstallationRecord,
    PaymentManagerGenericResponse, PurchaseOrderRecord, RackRecord,
};

/// What a "not found" wire code refers to for a given operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    PaymentRack,
    PurchaseOrder,
    Booking,
}

impl Lookup {
    fn not_found(self) -> DomainError {
        match self {
            Lookup::PaymentRack => DomainError::PaymentRackNotFound,
            Lookup::PurchaseOrder => DomainError::PurchaseOrderNotFound,
            Lookup::Booking => DomainError::BookingNotFound,
        }
    }
}

pub fn status_error(status: &Status, lookup: Lookup) -> DomainError {
    match status.code() {
        Code::NotFound => lookup.not_found(),
        Code::InvalidArgument => DomainError::InvalidPaymentRackId,
        _ => DomainError::ServiceUnavailable,
    }
}

/// Runs one backend call bounded by `timeout`.
pub async fn within<T, F>(
    timeout: Duration,
    operation: &'static str,
    lookup: Lookup,
    call: F,
) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, Status>>,
{
    within_deadline(Instant::now() + timeout, operation, lookup, call).await
}

pub async fn within_deadline<T, F>(
    deadline: Instant,
    operation: &'static str,
    lookup: Lookup,
    call: F,
) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, Status>>,
{
    match tokio::time::timeout_at(deadline, call).await {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(status)) => Err(transport_failure(operation, &status, lookup)),
        Err(_) => {
            error!(operation, "Backend call timed out");
            Err(DomainError::ServiceUnavailable)
        }
    }
}

pub fn transport_failure(operation: &'static str, status: &Status, lookup: Lookup) -> DomainError {
    error!(
        operation,
        code = ?status.code(),
        detail = status.message(),
        "Backend call failed"
    );
    status_error(status, lookup)
}

/// The common header of every backend response, once validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub transaction_id: String,
    pub message: String,
    pub status: ResponseStatus,
    pub trace_id: String,
}

/// Fails with `on_error` when the backend reported ERROR, and with
/// [`DomainError::ServiceUnavailable`] when the envelope is missing.
pub fn envelope(
    response: Option<PaymentManagerGenericResponse>,
    operation: &'static str,
    on_error: DomainError,
) -> Result<Envelope, DomainError> {
    let Some(response) = response else {
        warn!(operation, "Backend response carries no envelope");
        return Err(DomainError::ServiceUnavailable);
    };
    let status = response_status(response.status);
    if status == ResponseStatus::Error {
        warn!(
            operation,
            trace_id = %response.trace_id,
            detail = %response.message,
            "Backend reported an error"
        );
        return Err(on_error);
    }
    Ok(Envelope {
        transaction_id: response.transaction_id,
        message: response.message,
        status,
        trace_id: response.trace_id,
    })
}

pub fn response_status(raw: i32) -> ResponseStatus {
    match wire::ResponseStatus::try_from(raw) {
        Ok(wire::ResponseStatus::Ok) => ResponseStatus::Ok,
        Ok(wire::ResponseStatus::Error) => ResponseStatus::Error,
        Ok(wire::ResponseStatus::Unspecified) | Err(_) => ResponseStatus::Unspecified,
    }
}

pub fn unit_measurement(raw: i32) -> UnitMeasurement {
    match wire::UnitMeasurement::try_from(raw) {
        Ok(wire::UnitMeasurement::Hour) => UnitMeasurement::Hour,
        Ok(wire::UnitMeasurement::Day) => UnitMeasurement::Day,
        Ok(wire::UnitMeasurement::Week) => UnitMeasurement::Week,
        Ok(wire::UnitMeasurement::Month) => UnitMeasurement::Month,
        Ok(wire::UnitMeasurement::Unspecified) | Err(_) => UnitMeasurement::Unspecified,
    }
}

pub fn open_status(raw: i32) -> OpenStatus {
    match wire_booking::OpenStatus::try_from(raw) {
        Ok(wire_booking::OpenStatus::Received) => OpenStatus::Received,
        Ok(wire_booking::OpenStatus::Requested) => OpenStatus::Requested,
        Ok(wire_booking::OpenStatus::Executed) => OpenStatus::Executed,
        Ok(wire_booking::OpenStatus::Error) => OpenStatus::Error,
        Ok(wire_booking::OpenStatus::Success) => OpenStatus::Success,
        Ok(wire_booking::OpenStatus::Unspecified) | Err(_) => OpenStatus::Unspecified,
    }
}

pub fn payment_rack(record: RackRecord) -> PaymentRack {
    PaymentRack {
        id: record.id,
        description: record.description,
        address: record.address,
    }
}

pub fn installation(record: InstallationRecord) -> Installation {
    Installation {
        id: record.id,
        name: record.name,
        region: record.region,
        city: record.city,
        address: record.address,
        image_url: record.image_url,
    }
}

pub fn booking_time(record: BookingTimeRecord) -> BookingTime {
    BookingTime {
        id: record.id,
        name: record.name,
        unit_measurement: unit_measurement(record.unit_measurement),
        amount: record.amount,
    }
}

pub fn payment_group(record: AvailablePaymentGroupRecord) -> AvailablePaymentGroup {
    AvailablePaymentGroup {
        group_id: record.group_id,
        name: record.name,
        price: record.price,
        description: record.description,
        image_url: record.image_url,
    }
}

/// An OK response without a record yields empty order fields.
pub fn purchase_order(envelope: Envelope, record: Option<PurchaseOrderRecord>) -> PurchaseOrderData {
    let record = record.unwrap_or_default();
    PurchaseOrderData {
        transaction_id: envelope.transaction_id,
        message: envelope.message,
        status: envelope.status,
        trace_id: envelope.trace_id,
        coupon_id: record.coupon_id,
        booking_reference: record.booking_reference,
        order_code: record.oc,
        email: record.email,
        phone: record.phone,
        discount: record.discount,
        product_price: record.product_price,
        final_product_price: record.final_product_price,
        product_name: record.product_name,
        product_description: record.product_description,
        locker_position: record.locker_position,
        installation_name: record.installation_name,
        device_serial: record.device_serie_num,
        order_status: record.status,
    }
}

pub fn booking_status(record: BookingStatusRecord) -> BookingStatusData {
    BookingStatusData {
        id: record.id,
        configuration_booking_id: record.configuration_booking_id,
        init_booking: record.init_booking,
        finish_booking: record.finish_booking,
        installation_name: record.installation_name,
        number_locker: record.number_locker,
        device_id: record.device_id,
        current_code: record.current_code,
        openings: record.openings,
        service_name: record.service_name,
        email_recipient: record.email_recipient,
        created_at: record.created_at,
        updated_at: record.updated_at,
    }
}
