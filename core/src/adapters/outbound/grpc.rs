//! Backends reached over gRPC.
//!
//! A [`Channel`] is a cheap handle onto a multiplexed HTTP/2 connection, so a
//! client is created per call from a clone of it.

use async_trait::async_trait;
use futures::StreamExt;
use tonic::Status;
use tonic::transport::Channel;

use paybff_protocols::booking::{
    CheckBookingStatusRequest, CheckBookingStatusResponse, ExecuteOpenRequest,
};
use paybff_protocols::payment::{
    GenerateBookingRequest, GenerateBookingResponse, GeneratePurchaseOrderRequest,
    GeneratePurchaseOrderResponse, GetAvailableLockersRequest, GetAvailableLockersResponse,
    GetPaymentInfraByQrValueRequest, GetPaymentInfraByQrValueResponse,
    GetPurchaseOrderByPoRequest, GetPurchaseOrderByPoResponse, ValidateDiscountCouponRequest,
    ValidateDiscountCouponResponse,
};
use paybff_protocols::{BookingServiceClient, PaymentManagerClient};

use super::backend::{BookingBackend, OpenStream, PaymentBackend};

#[derive(Debug, Clone)]
pub struct GrpcPaymentBackend {
    channel: Channel,
}

impl GrpcPaymentBackend {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    fn client(&self) -> PaymentManagerClient {
        PaymentManagerClient::new(self.channel.clone())
    }
}

#[async_trait]
impl PaymentBackend for GrpcPaymentBackend {
    async fn get_payment_infra_by_qr_value(
        &self,
        request: GetPaymentInfraByQrValueRequest,
    ) -> Result<GetPaymentInfraByQrValueResponse, Status> {
        let response = self.client().get_payment_infra_by_qr_value(request).await?;
        Ok(response.into_inner())
    }

    async fn get_available_lockers(
        &self,
        request: GetAvailableLockersRequest,
    ) -> Result<GetAvailableLockersResponse, Status> {
        let response = self
            .client()
            .get_available_lockers_by_rack_id_and_booking_time(request)
            .await?;
        Ok(response.into_inner())
    }

    async fn validate_discount_coupon(
        &self,
        request: ValidateDiscountCouponRequest,
    ) -> Result<ValidateDiscountCouponResponse, Status> {
        let response = self.client().validate_discount_coupon(request).await?;
        Ok(response.into_inner())
    }

    async fn generate_purchase_order(
        &self,
        request: GeneratePurchaseOrderRequest,
    ) -> Result<GeneratePurchaseOrderResponse, Status> {
        let response = self.client().generate_purchase_order(request).await?;
        Ok(response.into_inner())
    }

    async fn generate_booking(
        &self,
        request: GenerateBookingRequest,
    ) -> Result<GenerateBookingResponse, Status> {
        let response = self.client().generate_booking(request).await?;
        Ok(response.into_inner())
    }

    async fn get_purchase_order_by_po(
        &self,
        request: GetPurchaseOrderByPoRequest,
    ) -> Result<GetPurchaseOrderByPoResponse, Status> {
        let response = self.client().get_purchase_order_by_po(request).await?;
        Ok(response.into_inner())
    }
}

#[derive(Debug, Clone)]
pub struct GrpcBookingBackend {
    channel: Channel,
}

impl GrpcBookingBackend {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    fn client(&self) -> BookingServiceClient {
        BookingServiceClient::new(self.channel.clone())
    }
}

#[async_trait]
impl BookingBackend for GrpcBookingBackend {
    async fn check_booking_status(
        &self,
        request: CheckBookingStatusRequest,
    ) -> Result<CheckBookingStatusResponse, Status> {
        let response = self.client().check_booking_status(request).await?;
        Ok(response.into_inner())
    }

    async fn execute_open(&self, request: ExecuteOpenRequest) -> Result<OpenStream, Status> {
        // A single request; the send half closes once it has been written.
        let outbound = futures::stream::iter(std::iter::once(request));
        let response = self.client().execute_open(outbound).await?;
        Ok(response.into_inner().boxed())
    }
}
