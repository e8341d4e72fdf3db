use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use paybff_common::DomainError;
use paybff_common::input::{Checkout, Id, Text};
use paybff_common::model::{
    AvailableLockers, Booking, DiscountCouponValidation, PaymentInfra, PurchaseOrder,
    PurchaseOrderData,
};
use paybff_protocols::payment::{
    GenerateBookingRequest, GeneratePurchaseOrderRequest, GetAvailableLockersRequest,
    GetPaymentInfraByQrValueRequest, GetPurchaseOrderByPoRequest, ValidateDiscountCouponRequest,
};

use super::backend::PaymentBackend;
use super::translate::{self, Lookup, envelope, within};
use crate::ports::outbound::PaymentGateway;

/// [`PaymentGateway`] over any wire-level payment backend.
pub struct PaymentInfraAdapter<B> {
    backend: B,
    timeout: Duration,
}

impl<B: PaymentBackend> PaymentInfraAdapter<B> {
    pub fn new(backend: B, timeout: Duration) -> Self {
        Self { backend, timeout }
    }
}

#[async_trait]
impl<B: PaymentBackend> PaymentGateway for PaymentInfraAdapter<B> {
    async fn get_payment_infra_by_qr_value(
        &self,
        qr_value: &Text,
    ) -> Result<PaymentInfra, DomainError> {
        const OP: &str = "get_payment_infra_by_qr_value";
        debug!(operation = OP, %qr_value, "Calling payment service");

        let request = GetPaymentInfraByQrValueRequest {
            qr_value: qr_value.to_string(),
        };
        let response = within(
            self.timeout,
            OP,
            Lookup::PaymentRack,
            self.backend.get_payment_infra_by_qr_value(request),
        )
        .await?;
        let header = envelope(response.response, OP, DomainError::PaymentRackNotFound)?;

        Ok(PaymentInfra {
            transaction_id: header.transaction_id,
            message: header.message,
            status: header.status,
            trace_id: header.trace_id,
            payment_rack: response.payment_rack.map(translate::payment_rack),
            installation: response.installation.map(translate::installation),
            booking_times: response
                .booking_times
                .into_iter()
                .map(translate::booking_time)
                .collect(),
        })
    }

    async fn get_available_lockers(
        &self,
        rack_id: Id,
        booking_time_id: Id,
        trace_id: &Text,
    ) -> Result<AvailableLockers, DomainError> {
        const OP: &str = "get_available_lockers";
        debug!(operation = OP, %trace_id, %rack_id, %booking_time_id, "Calling payment service");

        let request = GetAvailableLockersRequest {
            payment_rack_id: rack_id.get(),
            booking_time_id: booking_time_id.get(),
            trace_id: trace_id.to_string(),
        };
        let response = within(
            self.timeout,
            OP,
            Lookup::PaymentRack,
            self.backend.get_available_lockers(request),
        )
        .await?;
        let header = envelope(response.response, OP, DomainError::NoLockersAvailable)?;

        Ok(AvailableLockers {
            transaction_id: header.transaction_id,
            message: header.message,
            status: header.status,
            trace_id: header.trace_id,
            available_groups: response
                .available_groups
                .into_iter()
                .map(translate::payment_group)
                .collect(),
        })
    }

    async fn validate_discount_coupon(
        &self,
        coupon_code: &Text,
        rack_id: Id,
        trace_id: &Text,
    ) -> Result<DiscountCouponValidation, DomainError> {
        const OP: &str = "validate_discount_coupon";
        debug!(operation = OP, %trace_id, %rack_id, "Calling payment service");

        let request = ValidateDiscountCouponRequest {
            coupon_code: coupon_code.to_string(),
            rack_id: rack_id.get(),
            trace_id: trace_id.to_string(),
        };
        let response = within(
            self.timeout,
            OP,
            Lookup::PaymentRack,
            self.backend.validate_discount_coupon(request),
        )
        .await?;
        let header = envelope(response.response, OP, DomainError::InvalidCoupon)?;

        Ok(DiscountCouponValidation {
            transaction_id: header.transaction_id,
            message: header.message,
            status: header.status,
            trace_id: header.trace_id,
            discount_percentage: response.discount_percentage,
        })
    }

    async fn generate_purchase_order(
        &self,
        checkout: &Checkout,
        gateway_name: &Text,
    ) -> Result<PurchaseOrder, DomainError> {
        const OP: &str = "generate_purchase_order";
        debug!(operation = OP, trace_id = %checkout.trace_id, %gateway_name, "Calling payment service");

        let request = GeneratePurchaseOrderRequest {
            rack_id_reference: checkout.rack_id_reference.get(),
            group_id: checkout.group_id.get(),
            coupon_code: checkout.coupon_code.as_ref().map(Text::to_string),
            user_email: checkout.email.to_string(),
            user_phone: checkout.phone.to_string(),
            trace_id: checkout.trace_id.to_string(),
            gateway_name: gateway_name.to_string(),
        };
        let response = within(
            self.timeout,
            OP,
            Lookup::PaymentRack,
            self.backend.generate_purchase_order(request),
        )
        .await?;
        let header = envelope(response.response, OP, DomainError::PurchaseOrderGenerationFailed)?;

        Ok(PurchaseOrder {
            transaction_id: header.transaction_id,
            message: header.message,
            status: header.status,
            trace_id: header.trace_id,
            url: response.url,
        })
    }

    async fn generate_booking(&self, checkout: &Checkout) -> Result<Booking, DomainError> {
        const OP: &str = "generate_booking";
        debug!(operation = OP, trace_id = %checkout.trace_id, "Calling payment service");

        let request = GenerateBookingRequest {
            rack_id_reference: checkout.rack_id_reference.get(),
            group_id: checkout.group_id.get(),
            coupon_code: checkout.coupon_code.as_ref().map(Text::to_string),
            user_email: checkout.email.to_string(),
            user_phone: checkout.phone.to_string(),
            trace_id: checkout.trace_id.to_string(),
        };
        let response = within(
            self.timeout,
            OP,
            Lookup::PaymentRack,
            self.backend.generate_booking(request),
        )
        .await?;
        let header = envelope(response.response, OP, DomainError::BookingGenerationFailed)?;

        Ok(Booking {
            transaction_id: header.transaction_id,
            message: header.message,
            status: header.status,
            trace_id: header.trace_id,
            code: response.code,
        })
    }

    async fn get_purchase_order_by_po(
        &self,
        purchase_order: &Text,
        trace_id: &Text,
    ) -> Result<PurchaseOrderData, DomainError> {
        const OP: &str = "get_purchase_order_by_po";
        debug!(operation = OP, %trace_id, %purchase_order, "Calling payment service");

        let request = GetPurchaseOrderByPoRequest {
            purchase_order: purchase_order.to_string(),
            trace_id: trace_id.to_string(),
        };
        let response = within(
            self.timeout,
            OP,
            Lookup::PurchaseOrder,
            self.backend.get_purchase_order_by_po(request),
        )
        .await?;
        let header = envelope(response.response, OP, DomainError::PurchaseOrderNotFound)?;

        Ok(translate::purchase_order(header, response.purchase_order))
    }
}
