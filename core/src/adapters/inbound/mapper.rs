//! Domain → external schema.
//!
//! Every entity mapper accepts `Option<&T>` and returns `None` for `None`, so
//! optional parts of a response map without special-casing at the call site.

use paybff_common::model::{
    self as domain, AvailableLockers, BookingStatusCheck, DiscountCouponValidation,
    ExecuteOpenResult, PaymentInfra, PurchaseOrderData,
};

use super::schema::{
    self, AvailableLockersResponse, AvailablePaymentGroup, BookingStatusData,
    CheckBookingStatusResponse, ExecuteOpenResponse, GenerateBookingResponse,
    GeneratePurchaseOrderResponse, PaymentBookingTime, PaymentInfraResponse, PaymentInstallation,
    PaymentRack, PurchaseOrderResponse, ValidateDiscountCouponResponse,
};

pub fn response_status(status: domain::ResponseStatus) -> schema::ResponseStatus {
    match status {
        domain::ResponseStatus::Ok => schema::ResponseStatus::Ok,
        domain::ResponseStatus::Error => schema::ResponseStatus::Error,
        _ => schema::ResponseStatus::Unspecified,
    }
}

pub fn unit_measurement(unit: domain::UnitMeasurement) -> schema::UnitMeasurement {
    match unit {
        domain::UnitMeasurement::Hour => schema::UnitMeasurement::Hour,
        domain::UnitMeasurement::Day => schema::UnitMeasurement::Day,
        domain::UnitMeasurement::Week => schema::UnitMeasurement::Week,
        domain::UnitMeasurement::Month => schema::UnitMeasurement::Month,
        _ => schema::UnitMeasurement::Unspecified,
    }
}

pub fn open_status(status: domain::OpenStatus) -> schema::OpenStatus {
    match status {
        domain::OpenStatus::Received => schema::OpenStatus::Received,
        domain::OpenStatus::Requested => schema::OpenStatus::Requested,
        domain::OpenStatus::Executed => schema::OpenStatus::Executed,
        domain::OpenStatus::Error => schema::OpenStatus::Error,
        domain::OpenStatus::Success => schema::OpenStatus::Success,
        _ => schema::OpenStatus::Unspecified,
    }
}

pub fn response_status_from(status: schema::ResponseStatus) -> domain::ResponseStatus {
    match status {
        schema::ResponseStatus::Ok => domain::ResponseStatus::Ok,
        schema::ResponseStatus::Error => domain::ResponseStatus::Error,
        schema::ResponseStatus::Unspecified => domain::ResponseStatus::Unspecified,
    }
}

pub fn unit_measurement_from(unit: schema::UnitMeasurement) -> domain::UnitMeasurement {
    match unit {
        schema::UnitMeasurement::Hour => domain::UnitMeasurement::Hour,
        schema::UnitMeasurement::Day => domain::UnitMeasurement::Day,
        schema::UnitMeasurement::Week => domain::UnitMeasurement::Week,
        schema::UnitMeasurement::Month => domain::UnitMeasurement::Month,
        schema::UnitMeasurement::Unspecified => domain::UnitMeasurement::Unspecified,
    }
}

pub fn open_status_from(status: schema::OpenStatus) -> domain::OpenStatus {
    match status {
        schema::OpenStatus::Received => domain::OpenStatus::Received,
        schema::OpenStatus::Requested => domain::OpenStatus::Requested,
        schema::OpenStatus::Executed => domain::OpenStatus::Executed,
        schema::OpenStatus::Error => domain::OpenStatus::Error,
        schema::OpenStatus::Success => domain::OpenStatus::Success,
        schema::OpenStatus::Unspecified => domain::OpenStatus::Unspecified,
    }
}

pub fn payment_infra(infra: Option<&PaymentInfra>) -> Option<PaymentInfraResponse> {
    let infra = infra?;
    Some(PaymentInfraResponse {
        transaction_id: infra.transaction_id.clone(),
        message: infra.message.clone(),
        status: response_status(infra.status),
        trace_id: infra.trace_id.clone(),
        payment_rack: infra.payment_rack.as_ref().map(|rack| PaymentRack {
            id: rack.id,
            description: rack.description.clone(),
            address: rack.address.clone(),
        }),
        installation: infra.installation.as_ref().map(|site| PaymentInstallation {
            id: site.id,
            name: site.name.clone(),
            region: site.region.clone(),
            city: site.city.clone(),
            address: site.address.clone(),
            image_url: site.image_url.clone(),
        }),
        booking_times: infra
            .booking_times
            .iter()
            .map(|tier| PaymentBookingTime {
                id: tier.id,
                name: tier.name.clone(),
                unit_measurement: unit_measurement(tier.unit_measurement),
                amount: tier.amount,
            })
            .collect(),
    })
}

pub fn available_lockers(lockers: Option<&AvailableLockers>) -> Option<AvailableLockersResponse> {
    let lockers = lockers?;
    Some(AvailableLockersResponse {
        transaction_id: lockers.transaction_id.clone(),
        message: lockers.message.clone(),
        status: response_status(lockers.status),
        trace_id: lockers.trace_id.clone(),
        available_groups: lockers
            .available_groups
            .iter()
            .map(|group| AvailablePaymentGroup {
                group_id: group.group_id,
                name: group.name.clone(),
                price: group.price,
                description: group.description.clone(),
                image_url: group.image_url.clone(),
            })
            .collect(),
    })
}

pub fn coupon_validation(
    validation: Option<&DiscountCouponValidation>,
) -> Option<ValidateDiscountCouponResponse> {
    let validation = validation?;
    Some(ValidateDiscountCouponResponse {
        transaction_id: validation.transaction_id.clone(),
        message: validation.message.clone(),
        status: response_status(validation.status),
        trace_id: validation.trace_id.clone(),
        discount_percentage: validation.discount_percentage,
    })
}

pub fn purchase_order(order: Option<&domain::PurchaseOrder>) -> Option<GeneratePurchaseOrderResponse> {
    let order = order?;
    Some(GeneratePurchaseOrderResponse {
        transaction_id: order.transaction_id.clone(),
        message: order.message.clone(),
        status: response_status(order.status),
        trace_id: order.trace_id.clone(),
        url: order.url.clone(),
    })
}

pub fn booking(booking: Option<&domain::Booking>) -> Option<GenerateBookingResponse> {
    let booking = booking?;
    Some(GenerateBookingResponse {
        transaction_id: booking.transaction_id.clone(),
        message: booking.message.clone(),
        status: response_status(booking.status),
        trace_id: booking.trace_id.clone(),
        code: booking.code.clone(),
    })
}

pub fn purchase_order_data(order: Option<&PurchaseOrderData>) -> Option<PurchaseOrderResponse> {
    let order = order?;
    Some(PurchaseOrderResponse {
        transaction_id: order.transaction_id.clone(),
        message: order.message.clone(),
        status: response_status(order.status),
        trace_id: order.trace_id.clone(),
        purchase_order_data: Some(schema::PurchaseOrderData {
            coupon_id: order.coupon_id,
            booking_reference: order.booking_reference,
            oc: order.order_code.clone(),
            email: order.email.clone(),
            phone: order.phone.clone(),
            discount: order.discount,
            product_price: order.product_price,
            final_product_price: order.final_product_price.to_string(),
            product_name: order.product_name.clone(),
            product_description: order.product_description.clone(),
            locker_position: order.locker_position,
            installation_name: order.installation_name.clone(),
            device_serie_num: order.device_serial.clone(),
            status: order.order_status.clone(),
        }),
    })
}

pub fn booking_status(check: Option<&BookingStatusCheck>) -> Option<CheckBookingStatusResponse> {
    let check = check?;
    Some(CheckBookingStatusResponse {
        transaction_id: check.transaction_id.clone(),
        message: check.message.clone(),
        status: response_status(check.status),
        booking: check.booking.as_ref().map(|data| BookingStatusData {
            id: data.id,
            configuration_booking_id: data.configuration_booking_id,
            init_booking: data.init_booking.clone(),
            finish_booking: data.finish_booking.clone(),
            installation_name: data.installation_name.clone(),
            number_locker: data.number_locker,
            device_id: data.device_id.clone(),
            current_code: data.current_code.clone(),
            openings: data.openings,
            service_name: data.service_name.clone(),
            email_recipient: data.email_recipient.clone(),
            created_at: data.created_at.clone(),
            updated_at: data.updated_at.clone(),
        }),
    })
}

pub fn open_result(result: Option<&ExecuteOpenResult>) -> Option<ExecuteOpenResponse> {
    let result = result?;
    Some(ExecuteOpenResponse {
        transaction_id: result.transaction_id.clone(),
        message: result.message.clone(),
        status: response_status(result.status),
        open_status: open_status(result.open_status),
        interrupted: result.interrupted,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
