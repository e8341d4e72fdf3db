#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use paybff_common::DomainError;
use paybff_common::config::BackendConfig;
use paybff_common::model::{OpenStatus, ResponseStatus, UnitMeasurement};
use paybff_core::adapters::outbound::standin::{StandInBookingBackend, StandInPaymentBackend};
use paybff_core::adapters::outbound::{BookingAdapter, ConnectError, Gateways, PaymentInfraAdapter};
use paybff_core::application::services::locker_access::LockerAccessService;
use paybff_core::application::services::payment_infra::{CheckoutArgs, PaymentInfraService};

use crate::support::strict_payments;

fn pinned() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 18, 30, 5).unwrap()
}

fn services() -> (PaymentInfraService, LockerAccessService) {
    let timeout = Duration::from_secs(5);
    let payment = PaymentInfraAdapter::new(StandInPaymentBackend::with_clock(pinned), timeout);
    let booking = BookingAdapter::new(StandInBookingBackend::with_clock(pinned), timeout);
    (
        PaymentInfraService::new(Arc::new(payment)),
        LockerAccessService::new(Arc::new(booking)),
    )
}

fn checkout(coupon: Option<&str>) -> CheckoutArgs {
    CheckoutArgs {
        rack_id_reference: 1,
        group_id: 2,
        coupon_code: coupon.map(str::to_string),
        email: "user@odihnx.com".to_string(),
        phone: "+56912345678".to_string(),
        trace_id: "trace-flow".to_string(),
    }
}

/// Walks a customer from scanning the rack QR code to a paid order.
#[tokio::test]
async fn checkout_flow_offline() {
    let (payments, _) = services();

    let infra = payments.get_payment_infra_by_qr_value("RACK-QR-1").await.unwrap();
    assert_eq!(infra.status, ResponseStatus::Ok);
    assert_eq!(infra.transaction_id, "20250601183005");
    let rack = infra.payment_rack.expect("rack present when status is OK");
    let tier = &infra.booking_times[0];
    assert_eq!(tier.unit_measurement, UnitMeasurement::Day);

    let lockers = payments
        .get_available_lockers(i64::from(rack.id), i64::from(tier.id), "trace-flow")
        .await
        .unwrap();
    assert_eq!(lockers.available_groups.len(), 3);

    let coupon = payments
        .validate_discount_coupon("GRATIS", i64::from(rack.id), "trace-flow")
        .await
        .unwrap();
    assert_eq!(coupon.discount_percentage, 100.0);

    let order = payments
        .generate_purchase_order(&checkout(Some("GRATIS")), "WEBPAY")
        .await
        .unwrap();
    assert_eq!(order.url, "https://payment.odihnx.com/pay/20250601183005");
    assert_eq!(order.trace_id, "trace-flow");

    let booking = payments.generate_booking(&checkout(None)).await.unwrap();
    assert_eq!(booking.code, "ABC123DEF");

    let stored = payments
        .get_purchase_order_by_po("OC-20250601", "trace-flow")
        .await
        .unwrap();
    assert_eq!(stored.order_code, "OC-20250601");
    assert_eq!(stored.order_status, "PAID");
}

#[tokio::test]
async fn locker_access_flow_offline() {
    let (_, lockers) = services();

    let check = lockers
        .check_booking_status("locker-app", "ABC123DEF")
        .await
        .unwrap();
    let booking = check.booking.expect("booking present");
    assert_eq!(booking.current_code, "ABC123DEF");
    assert_eq!(booking.init_booking, "2025-05-31T18:30:05Z");
    assert_eq!(booking.finish_booking, "2025-06-02T18:30:05Z");

    let opened = lockers.execute_open("locker-app", "ABC123DEF").await.unwrap();
    assert_eq!(opened.open_status, OpenStatus::Success);
    assert!(opened.open_status.is_opened());
    assert!(!opened.interrupted);
}

#[tokio::test]
async fn validation_stops_before_the_backend() {
    let (payments, lockers) = services();

    assert_eq!(
        payments.validate_discount_coupon("", 1, "t1").await,
        Err(DomainError::invalid_input("couponCode"))
    );
    assert_eq!(
        payments.get_purchase_order_by_po("", "t1").await,
        Err(DomainError::invalid_input("purchaseOrder"))
    );
    assert_eq!(
        payments.get_available_lockers(1, 0, "t1").await,
        Err(DomainError::invalid_input("bookingTimeId"))
    );
    assert_eq!(
        lockers.execute_open("locker-app", " ").await,
        Err(DomainError::invalid_input("currentCode"))
    );
}

#[tokio::test]
async fn unknown_coupon_gets_no_discount_offline() {
    let (payments, _) = services();

    let coupon = payments
        .validate_discount_coupon("DESCUENTO99", 1, "t1")
        .await
        .unwrap();
    assert_eq!(coupon.status, ResponseStatus::Ok);
    assert_eq!(coupon.discount_percentage, 0.0);
}

#[tokio::test]
async fn backend_rejections_surface_as_domain_errors() {
    let payments = PaymentInfraService::new(Arc::new(strict_payments()));

    let error = payments
        .validate_discount_coupon("DESCUENTO99", 1, "t1")
        .await
        .unwrap_err();
    assert_eq!(error, DomainError::InvalidCoupon);
    assert_eq!(error.code(), "INVALID_COUPON");
    assert!(!error.is_retryable());

    let accepted = payments
        .validate_discount_coupon("DESCUENTO50", 1, "t1")
        .await
        .unwrap();
    assert_eq!(accepted.discount_percentage, 50.0);
}

#[tokio::test]
async fn offline_gateways_come_from_config() {
    let gateways = Gateways::connect(&BackendConfig::offline()).await.unwrap();
    let payments = PaymentInfraService::new(gateways.payment);

    let lockers = payments.get_available_lockers(1, 1, "t1").await.unwrap();
    let prices: Vec<f64> = lockers.available_groups.iter().map(|g| g.price).collect();
    assert_eq!(prices, vec![2000.0, 3000.0, 4000.0]);
}

#[tokio::test]
async fn unreachable_backend_fails_startup() {
    let config = BackendConfig {
        booking_service_address: "127.0.0.1:1".to_string(),
        payment_service_address: "127.0.0.1:1".to_string(),
        timeout: Duration::from_millis(300),
        offline: false,
    };
    let result = Gateways::connect(&config).await;
    assert!(matches!(result, Err(ConnectError::Unreachable { .. })));
}
