//! Client stubs for the two backend services.
//!
//! Written in the shape of tonic's generated clients: every method waits for
//! the channel to be ready, then issues the call with a [`ProstCodec`]. Clients
//! wrap a cloned [`Channel`], so creating one per call is cheap.

use tonic::client::Grpc;
use tonic::codec::{ProstCodec, Streaming};
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::Channel;
use tonic::{Code, IntoRequest, IntoStreamingRequest, Request, Response, Status};

use crate::booking::{
    CheckBookingStatusRequest, CheckBookingStatusResponse, ExecuteOpenRequest, ExecuteOpenResponse,
};
use crate::payment::{
    GenerateBookingRequest, GenerateBookingResponse, GeneratePurchaseOrderRequest,
    GeneratePurchaseOrderResponse, GetAvailableLockersRequest, GetAvailableLockersResponse,
    GetPaymentInfraByQrValueRequest, GetPaymentInfraByQrValueResponse,
    GetPurchaseOrderByPoRequest, GetPurchaseOrderByPoResponse, ValidateDiscountCouponRequest,
    ValidateDiscountCouponResponse,
};

pub const PAYMENT_SERVICE: &str = "paymentmanager.v1.PaymentManagerService";
pub const BOOKING_SERVICE: &str = "booking.v1.BookingService";

#[derive(Debug, Clone)]
pub struct PaymentManagerClient {
    inner: Grpc<Channel>,
}

impl PaymentManagerClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: Grpc::new(channel),
        }
    }

    pub async fn get_payment_infra_by_qr_value(
        &mut self,
        request: impl IntoRequest<GetPaymentInfraByQrValueRequest>,
    ) -> Result<Response<GetPaymentInfraByQrValueResponse>, Status> {
        let path = "/paymentmanager.v1.PaymentManagerService/GetPaymentInfraByQrValue";
        unary(&mut self.inner, request.into_request(), path).await
    }

    pub async fn get_available_lockers_by_rack_id_and_booking_time(
        &mut self,
        request: impl IntoRequest<GetAvailableLockersRequest>,
    ) -> Result<Response<GetAvailableLockersResponse>, Status> {
        let path =
            "/paymentmanager.v1.PaymentManagerService/GetAvailableLockersByRackIDAndBookingTime";
        unary(&mut self.inner, request.into_request(), path).await
    }

    pub async fn validate_discount_coupon(
        &mut self,
        request: impl IntoRequest<ValidateDiscountCouponRequest>,
    ) -> Result<Response<ValidateDiscountCouponResponse>, Status> {
        let path = "/paymentmanager.v1.PaymentManagerService/ValidateDiscountCoupon";
        unary(&mut self.inner, request.into_request(), path).await
    }

    pub async fn generate_purchase_order(
        &mut self,
        request: impl IntoRequest<GeneratePurchaseOrderRequest>,
    ) -> Result<Response<GeneratePurchaseOrderResponse>, Status> {
        let path = "/paymentmanager.v1.PaymentManagerService/GeneratePurchaseOrder";
        unary(&mut self.inner, request.into_request(), path).await
    }

    pub async fn generate_booking(
        &mut self,
        request: impl IntoRequest<GenerateBookingRequest>,
    ) -> Result<Response<GenerateBookingResponse>, Status> {
        let path = "/paymentmanager.v1.PaymentManagerService/GenerateBooking";
        unary(&mut self.inner, request.into_request(), path).await
    }

    pub async fn get_purchase_order_by_po(
        &mut self,
        request: impl IntoRequest<GetPurchaseOrderByPoRequest>,
    ) -> Result<Response<GetPurchaseOrderByPoResponse>, Status> {
        let path = "/paymentmanager.v1.PaymentManagerService/GetPurchaseOrderByPo";
        unary(&mut self.inner, request.into_request(), path).await
    }
}

#[derive(Debug, Clone)]
pub struct BookingServiceClient {
    inner: Grpc<Channel>,
}

impl BookingServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: Grpc::new(channel),
        }
    }

    pub async fn check_booking_status(
        &mut self,
        request: impl IntoRequest<CheckBookingStatusRequest>,
    ) -> Result<Response<CheckBookingStatusResponse>, Status> {
        let path = "/booking.v1.BookingService/CheckBookingStatus";
        unary(&mut self.inner, request.into_request(), path).await
    }

    /// Bidirectional stream: the server keeps reporting progress until it closes.
    pub async fn execute_open(
        &mut self,
        request: impl IntoStreamingRequest<Message = ExecuteOpenRequest>,
    ) -> Result<Response<Streaming<ExecuteOpenResponse>>, Status> {
        ready(&mut self.inner).await?;
        let codec = ProstCodec::default();
        let path = PathAndQuery::from_static("/booking.v1.BookingService/ExecuteOpen");
        self.inner
            .streaming(request.into_streaming_request(), path, codec)
            .await
    }
}

async fn ready(inner: &mut Grpc<Channel>) -> Result<(), Status> {
    inner
        .ready()
        .await
        .map_err(|e| Status::new(Code::Unknown, format!("Service was not ready: {e}")))
}

async fn unary<Req, Resp>(
    inner: &mut Grpc<Channel>,
    request: Request<Req>,
    path: &'static str,
) -> Result<Response<Resp>, Status>
where
    Req: prost::Message + Send + Sync + 'static,
    Resp: prost::Message + Default + Send + Sync + 'static,
{
    ready(inner).await?;
    let codec = ProstCodec::default();
    inner
        .unary(request, PathAndQuery::from_static(path), codec)
        .await
}
