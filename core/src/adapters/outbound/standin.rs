//! In-memory backends serving a fixed dataset.
//!
//! Used when the BFF runs offline. They answer at the wire level, so their
//! responses go through the same translation as those of the real services.

use async_trait::async_trait;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use futures::stream;
use tonic::Status;

use paybff_protocols::booking::{
    BookingStatusRecord, CheckBookingStatusRequest, CheckBookingStatusResponse, ExecuteOpenRequest,
    ExecuteOpenResponse, OpenStatus,
};
use paybff_protocols::payment::{
    AvailablePaymentGroupRecord, BookingTimeRecord, GenerateBookingRequest,
    GenerateBookingResponse, GeneratePurchaseOrderRequest, GeneratePurchaseOrderResponse,
    GetAvailableLockersRequest, GetAvailableLockersResponse, GetPaymentInfraByQrValueRequest,
    GetPaymentInfraByQrValueResponse, GetPurchaseOrderByPoRequest, GetPurchaseOrderByPoResponse,
    InstallationRecord, PaymentManagerGenericResponse, PurchaseOrderRecord, RackRecord,
    ResponseStatus, UnitMeasurement, ValidateDiscountCouponRequest, ValidateDiscountCouponResponse,
};

use super::backend::{BookingBackend, OpenStream, PaymentBackend};

pub type Clock = fn() -> DateTime<Utc>;

const COUPONS: [(&str, f64); 4] = [
    ("DESCUENTO10", 10.0),
    ("DESCUENTO20", 20.0),
    ("DESCUENTO50", 50.0),
    ("GRATIS", 100.0),
];

fn stamp(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d%H%M%S").to_string()
}

fn rfc3339(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn header(now: DateTime<Utc>, status: ResponseStatus, message: &str, trace_id: String) -> PaymentManagerGenericResponse {
    PaymentManagerGenericResponse {
        transaction_id: stamp(now),
        message: message.to_string(),
        status: status as i32,
        trace_id,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StandInPaymentBackend {
    clock: Clock,
}

impl StandInPaymentBackend {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for StandInPaymentBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentBackend for StandInPaymentBackend {
    async fn get_payment_infra_by_qr_value(
        &self,
        request: GetPaymentInfraByQrValueRequest,
    ) -> Result<GetPaymentInfraByQrValueResponse, Status> {
        let now = (self.clock)();
        let trace_id = format!("trace-{}", stamp(now));
        if request.qr_value.is_empty() {
            return Ok(GetPaymentInfraByQrValueResponse {
                response: Some(header(now, ResponseStatus::Error, "Valor QR inválido", trace_id)),
                ..Default::default()
            });
        }

        Ok(GetPaymentInfraByQrValueResponse {
            response: Some(header(now, ResponseStatus::Ok, "Success", trace_id)),
            payment_rack: Some(RackRecord {
                id: 1,
                description: "Rack Principal Chicureo".to_string(),
                address: "Chicureo".to_string(),
            }),
            installation: Some(InstallationRecord {
                id: 1,
                name: "DEV PAGO".to_string(),
                region: "Metropolitana".to_string(),
                city: "Colina".to_string(),
                address: "Chicureo".to_string(),
                image_url: "https://www.image.cl/image.jpg".to_string(),
            }),
            booking_times: vec![
                BookingTimeRecord {
                    id: 1,
                    name: "Express (1 día)".to_string(),
                    unit_measurement: UnitMeasurement::Day as i32,
                    amount: 1,
                },
                BookingTimeRecord {
                    id: 2,
                    name: "Normal (3 días)".to_string(),
                    unit_measurement: UnitMeasurement::Day as i32,
                    amount: 3,
                },
            ],
        })
    }

    async fn get_available_lockers(
        &self,
        request: GetAvailableLockersRequest,
    ) -> Result<GetAvailableLockersResponse, Status> {
        let now = (self.clock)();
        let group = |group_id, name: &str, price, description: &str, size: &str| {
            AvailablePaymentGroupRecord {
                group_id,
                name: name.to_string(),
                price,
                description: description.to_string(),
                image_url: format!("https://www.image.cl/locker-{size}.jpg"),
            }
        };

        Ok(GetAvailableLockersResponse {
            response: Some(header(now, ResponseStatus::Ok, "Success", request.trace_id)),
            available_groups: vec![
                group(1, "Locker Pequeño", 2000.0, "Locker de 30x30x40 cm - Ideal para paquetes pequeños", "small"),
                group(2, "Locker Mediano", 3000.0, "Locker de 45x45x60 cm - Para paquetes medianos", "medium"),
                group(3, "Locker Grande", 4000.0, "Locker de 60x60x80 cm - Máxima capacidad", "large"),
            ],
        })
    }

    async fn validate_discount_coupon(
        &self,
        request: ValidateDiscountCouponRequest,
    ) -> Result<ValidateDiscountCouponResponse, Status> {
        let now = (self.clock)();
        let discount_percentage = COUPONS
            .iter()
            .find(|(code, _)| *code == request.coupon_code)
            .map_or(0.0, |(_, discount)| *discount);

        Ok(ValidateDiscountCouponResponse {
            response: Some(header(now, ResponseStatus::Ok, "Coupon validation completed", request.trace_id)),
            discount_percentage,
        })
    }

    async fn generate_purchase_order(
        &self,
        request: GeneratePurchaseOrderRequest,
    ) -> Result<GeneratePurchaseOrderResponse, Status> {
        let now = (self.clock)();
        Ok(GeneratePurchaseOrderResponse {
            response: Some(header(
                now,
                ResponseStatus::Ok,
                "Purchase order generated successfully",
                request.trace_id,
            )),
            url: format!("https://payment.odihnx.com/pay/{}", stamp(now)),
        })
    }

    async fn generate_booking(
        &self,
        request: GenerateBookingRequest,
    ) -> Result<GenerateBookingResponse, Status> {
        let now = (self.clock)();
        Ok(GenerateBookingResponse {
            response: Some(header(now, ResponseStatus::Ok, "Reserva generada exitosamente", request.trace_id)),
            code: "ABC123DEF".to_string(),
        })
    }

    async fn get_purchase_order_by_po(
        &self,
        request: GetPurchaseOrderByPoRequest,
    ) -> Result<GetPurchaseOrderByPoResponse, Status> {
        let now = (self.clock)();
        if request.purchase_order.is_empty() {
            return Ok(GetPurchaseOrderByPoResponse {
                response: Some(header(now, ResponseStatus::Error, "Orden de compra inválida", request.trace_id)),
                purchase_order: None,
            });
        }

        Ok(GetPurchaseOrderByPoResponse {
            response: Some(header(now, ResponseStatus::Ok, "Orden de compra encontrada", request.trace_id)),
            purchase_order: Some(PurchaseOrderRecord {
                coupon_id: 1,
                booking_reference: 123,
                oc: request.purchase_order,
                email: "user@odihnx.com".to_string(),
                phone: "+56912345678".to_string(),
                discount: 0,
                product_price: 5000,
                final_product_price: 5000,
                product_name: "Locker 1 día".to_string(),
                product_description: "Arriendo de locker por 1 día".to_string(),
                locker_position: 15,
                installation_name: "DEV PAGO".to_string(),
                device_serie_num: "DEV-001".to_string(),
                status: "PAID".to_string(),
            }),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StandInBookingBackend {
    clock: Clock,
}

impl StandInBookingBackend {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self { clock }
    }
}

impl Default for StandInBookingBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingBackend for StandInBookingBackend {
    async fn check_booking_status(
        &self,
        request: CheckBookingStatusRequest,
    ) -> Result<CheckBookingStatusResponse, Status> {
        let now = (self.clock)();
        let trace_id = format!("trace-{}", stamp(now));
        Ok(CheckBookingStatusResponse {
            response: Some(header(now, ResponseStatus::Ok, "Success", trace_id)),
            booking: Some(BookingStatusRecord {
                id: 123,
                configuration_booking_id: 456,
                init_booking: rfc3339(now - Duration::hours(24)),
                finish_booking: rfc3339(now + Duration::hours(24)),
                installation_name: "installation-name".to_string(),
                number_locker: 15,
                device_id: "device-id".to_string(),
                current_code: request.current_code,
                openings: 2,
                service_name: request.service_name,
                email_recipient: "usuario@odihnx.com".to_string(),
                created_at: rfc3339(now - Duration::hours(48)),
                updated_at: rfc3339(now),
            }),
        })
    }

    async fn execute_open(&self, _request: ExecuteOpenRequest) -> Result<OpenStream, Status> {
        let now = (self.clock)();
        let trace_id = format!("trace-{}", stamp(now));
        let progress = [
            (OpenStatus::Received, "Solicitud recibida"),
            (OpenStatus::Requested, "Apertura solicitada"),
            (OpenStatus::Executed, "Apertura ejecutada"),
            (OpenStatus::Success, "Locker abierto exitosamente"),
        ];
        let messages: Vec<Result<ExecuteOpenResponse, Status>> = progress
            .into_iter()
            .map(|(status, message)| {
                Ok(ExecuteOpenResponse {
                    response: Some(header(now, ResponseStatus::Ok, message, trace_id.clone())),
                    status: status as i32,
                })
            })
            .collect();
        Ok(Box::pin(stream::iter(messages)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use futures::StreamExt;

    fn pinned() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[tokio::test]
    async fn transaction_ids_follow_the_clock() {
        let backend = StandInPaymentBackend::with_clock(pinned);
        let response = backend
            .generate_purchase_order(GeneratePurchaseOrderRequest::default())
            .await
            .unwrap();
        assert_eq!(response.response.unwrap().transaction_id, "20250314092653");
        assert_eq!(response.url, "https://payment.odihnx.com/pay/20250314092653");
    }

    #[tokio::test]
    async fn coupon_table_is_honoured() {
        let backend = StandInPaymentBackend::with_clock(pinned);
        for (code, expected) in COUPONS {
            let request = ValidateDiscountCouponRequest {
                coupon_code: code.to_string(),
                ..Default::default()
            };
            let response = backend.validate_discount_coupon(request).await.unwrap();
            assert_eq!(response.discount_percentage, expected);
        }

        let request = ValidateDiscountCouponRequest {
            coupon_code: "NOPE".to_string(),
            ..Default::default()
        };
        let response = backend.validate_discount_coupon(request).await.unwrap();
        assert_eq!(response.discount_percentage, 0.0);
        assert_eq!(response.response.unwrap().status(), ResponseStatus::Ok);
    }

    #[tokio::test]
    async fn booking_window_surrounds_now() {
        let backend = StandInBookingBackend::with_clock(pinned);
        let request = CheckBookingStatusRequest {
            service_name: "locker-app".to_string(),
            current_code: "ABC123DEF".to_string(),
        };
        let booking = backend.check_booking_status(request).await.unwrap().booking.unwrap();
        assert_eq!(booking.init_booking, "2025-03-13T09:26:53Z");
        assert_eq!(booking.finish_booking, "2025-03-15T09:26:53Z");
        assert_eq!(booking.created_at, "2025-03-12T09:26:53Z");
        assert_eq!(booking.updated_at, "2025-03-14T09:26:53Z");
        assert_eq!(booking.service_name, "locker-app");
    }

    #[tokio::test]
    async fn open_reports_every_step() {
        let backend = StandInBookingBackend::with_clock(pinned);
        let statuses: Vec<OpenStatus> = backend
            .execute_open(ExecuteOpenRequest::default())
            .await
            .unwrap()
            .map(|message| message.unwrap().status())
            .collect()
            .await;
        assert_eq!(
            statuses,
            vec![
                OpenStatus::Received,
                OpenStatus::Requested,
                OpenStatus::Executed,
                OpenStatus::Success
            ]
        );
    }
}
