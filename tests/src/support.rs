#![cfg(test)]
//! A payment backend that refuses coupons it gives no discount for, the way
//! the live payment service does.

use std::time::Duration;

use async_trait::async_trait;
use paybff_core::adapters::outbound::PaymentInfraAdapter;
use paybff_core::adapters::outbound::backend::PaymentBackend;
use paybff_core::adapters::outbound::standin::StandInPaymentBackend;
use paybff_protocols::payment::{
    GenerateBookingRequest, GenerateBookingResponse, GeneratePurchaseOrderRequest,
    GeneratePurchaseOrderResponse, GetAvailableLockersRequest, GetAvailableLockersResponse,
    GetPaymentInfraByQrValueRequest, GetPaymentInfraByQrValueResponse,
    GetPurchaseOrderByPoRequest, GetPurchaseOrderByPoResponse, ResponseStatus,
    ValidateDiscountCouponRequest, ValidateDiscountCouponResponse,
};
use tonic::Status;

pub struct StrictCoupons(pub StandInPaymentBackend);

pub fn strict_payments() -> PaymentInfraAdapter<StrictCoupons> {
    PaymentInfraAdapter::new(StrictCoupons(StandInPaymentBackend::new()), Duration::from_secs(5))
}

#[async_trait]
impl PaymentBackend for StrictCoupons {
    async fn get_payment_infra_by_qr_value(
        &self,
        request: GetPaymentInfraByQrValueRequest,
    ) -> Result<GetPaymentInfraByQrValueResponse, Status> {
        self.0.get_payment_infra_by_qr_value(request).await
    }

    async fn get_available_lockers(
        &self,
        request: GetAvailableLockersRequest,
    ) -> Result<GetAvailableLockersResponse, Status> {
        self.0.get_available_lockers(request).await
    }

    async fn validate_discount_coupon(
        &self,
        request: ValidateDiscountCouponRequest,
    ) -> Result<ValidateDiscountCouponResponse, Status> {
        let mut response = self.0.validate_discount_coupon(request).await?;
        if response.discount_percentage == 0.0 {
            if let Some(header) = response.response.as_mut() {
                header.status = ResponseStatus::Error as i32;
                header.message = "Cupón inválido".to_string();
            }
        }
        Ok(response)
    }

    async fn generate_purchase_order(
        &self,
        request: GeneratePurchaseOrderRequest,
    ) -> Result<GeneratePurchaseOrderResponse, Status> {
        self.0.generate_purchase_order(request).await
    }

    async fn generate_booking(
        &self,
        request: GenerateBookingRequest,
    ) -> Result<GenerateBookingResponse, Status> {
        self.0.generate_booking(request).await
    }

    async fn get_purchase_order_by_po(
        &self,
        request: GetPurchaseOrderByPoRequest,
    ) -> Result<GetPurchaseOrderByPoResponse, Status> {
        self.0.get_purchase_order_by_po(request).await
    }
}
