//! # Outbound Ports (Driven Actors)
//!
//! One capability trait per downstream service. Arguments are already
//! validated; implementations only have to talk to the backend and translate
//! what comes back.
//!
//! ## Rules
//! 1. Every failure is a [`DomainError`]; transport errors never cross this boundary.
//! 2. Implementations live in `adapters/outbound`.

use async_trait::async_trait;

use paybff_common::DomainError;
use paybff_common::input::{Checkout, Id, Text};
use paybff_common::model::{
    AvailableLockers, Booking, BookingStatusCheck, DiscountCouponValidation, ExecuteOpenResult,
    PaymentInfra, PurchaseOrder, PurchaseOrderData,
};

/// Payment infrastructure, lockers, coupons and purchase orders.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn get_payment_infra_by_qr_value(&self, qr_value: &Text)
    -> Result<PaymentInfra, DomainError>;

    async fn get_available_lockers(
        &self,
        rack_id: Id,
        booking_time_id: Id,
        trace_id: &Text,
    ) -> Result<AvailableLockers, DomainError>;

    async fn validate_discount_coupon(
        &self,
        coupon_code: &Text,
        rack_id: Id,
        trace_id: &Text,
    ) -> Result<DiscountCouponValidation, DomainError>;

    async fn generate_purchase_order(
        &self,
        checkout: &Checkout,
        gateway_name: &Text,
    ) -> Result<PurchaseOrder, DomainError>;

    async fn generate_booking(&self, checkout: &Checkout) -> Result<Booking, DomainError>;

    async fn get_purchase_order_by_po(
        &self,
        purchase_order: &Text,
        trace_id: &Text,
    ) -> Result<PurchaseOrderData, DomainError>;
}

/// Booking status and physical locker opening.
#[async_trait]
pub trait BookingGateway: Send + Sync {
    async fn check_booking_status(
        &self,
        service_name: &Text,
        current_code: &Text,
    ) -> Result<BookingStatusCheck, DomainError>;

    /// Returns the last state reported by the booking service.
    async fn execute_open(
        &self,
        service_name: &Text,
        current_code: &Text,
    ) -> Result<ExecuteOpenResult, DomainError>;
}
