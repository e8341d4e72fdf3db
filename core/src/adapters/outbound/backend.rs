//! Wire-level view of the two backend services.
//!
//! These traits speak protocol messages and [`Status`] codes. The gRPC adapter
//! implements them over a channel, the stand-ins implement them in memory, and
//! the gateway adapters sit on top and translate to the domain.

use async_trait::async_trait;
use futures::stream::BoxStream;
use tonic::Status;

use paybff_protocols::booking::{
    CheckBookingStatusRequest, CheckBookingStatusResponse, ExecuteOpenRequest, ExecuteOpenResponse,
};
use paybff_protocols::payment::{
    GenerateBookingRequest, GenerateBookingResponse, GeneratePurchaseOrderRequest,
    GeneratePurchaseOrderResponse, GetAvailableLockersRequest, GetAvailableLockersResponse,
    GetPaymentInfraByQrValueRequest, GetPaymentInfraByQrValueResponse,
    GetPurchaseOrderByPoRequest, GetPurchaseOrderByPoResponse, ValidateDiscountCouponRequest,
    ValidateDiscountCouponResponse,
};

/// Progress messages of a locker opening, in arrival order.
pub type OpenStream = BoxStream<'static, Result<ExecuteOpenResponse, Status>>;

#[async_trait]
pub trait PaymentBackend: Send + Sync {
    async fn get_payment_infra_by_qr_value(
        &self,
        request: GetPaymentInfraByQrValueRequest,
    ) -> Result<GetPaymentInfraByQrValueResponse, Status>;

    async fn get_available_lockers(
        &self,
        request: GetAvailableLockersRequest,
    ) -> Result<GetAvailableLockersResponse, Status>;

    async fn validate_discount_coupon(
        &self,
        request: ValidateDiscountCouponRequest,
    ) -> Result<ValidateDiscountCouponResponse, Status>;

    async fn generate_purchase_order(
        &self,
        request: GeneratePurchaseOrderRequest,
    ) -> Result<GeneratePurchaseOrderResponse, Status>;

    async fn generate_booking(
        &self,
        request: GenerateBookingRequest,
    ) -> Result<GenerateBookingResponse, Status>;

    async fn get_purchase_order_by_po(
        &self,
        request: GetPurchaseOrderByPoRequest,
    ) -> Result<GetPurchaseOrderByPoResponse, Status>;
}

#[async_trait]
pub trait BookingBackend: Send + Sync {
    async fn check_booking_status(
        &self,
        request: CheckBookingStatusRequest,
    ) -> Result<CheckBookingStatusResponse, Status>;

    /// Opens the stream; messages are pulled by the caller.
    async fn execute_open(&self, request: ExecuteOpenRequest) -> Result<OpenStream, Status>;
}
