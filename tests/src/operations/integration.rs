#![cfg(test)]
use std::sync::Arc;
use std::time::Duration;

use paybff_common::ErrorKind;
use paybff_core::adapters::inbound::query::{Api, NAMES, Outcome};
use paybff_core::adapters::outbound::Gateways;
use rstest::rstest;
use serde_json::{Value, json};

use crate::support::strict_payments;

fn api() -> Api {
    let gateways = Gateways::offline(Duration::from_secs(5));
    Api::new(gateways.payment, gateways.booking)
}

async fn run(document: Value) -> (Option<ErrorKind>, Value) {
    let outcome: Outcome = api().handle(document).await;
    let kind = outcome.error_kind();
    (kind, serde_json::to_value(&outcome).unwrap())
}

#[tokio::test]
async fn payment_infra_document() {
    let (kind, json) = run(json!({
        "operation": "getPaymentInfraByQrValue",
        "arguments": { "qrValue": "QR-1" }
    }))
    .await;

    assert_eq!(kind, None);
    let data = &json["data"];
    assert_eq!(data["status"], json!("RESPONSE_STATUS_OK"));
    assert_eq!(data["paymentRack"]["description"], json!("Rack Principal Chicureo"));
    assert_eq!(data["installation"]["imageUrl"], json!("https://www.image.cl/image.jpg"));
    assert_eq!(data["bookingTimes"][1]["unitMeasurement"], json!("DAY"));
    assert_eq!(data["bookingTimes"][1]["amount"], json!(3));
}

#[tokio::test]
async fn purchase_order_lookup_document() {
    let (_, json) = run(json!({
        "operation": "getPurchaseOrderByPo",
        "arguments": { "purchaseOrder": "OC-9", "traceId": "t1" }
    }))
    .await;

    let order = &json["data"]["purchaseOrderData"];
    assert_eq!(order["oc"], json!("OC-9"));
    assert_eq!(order["finalProductPrice"], json!("5000"));
    assert_eq!(order["deviceSerieNum"], json!("DEV-001"));
    assert_eq!(json["data"]["traceId"], json!("t1"));
}

#[tokio::test]
async fn purchase_order_document_with_blank_coupon() {
    let (kind, json) = run(json!({
        "operation": "generatePurchaseOrder",
        "arguments": {
            "rackIdReference": 1,
            "groupId": 3,
            "couponCode": "  ",
            "email": "user@odihnx.com",
            "phone": "+56912345678",
            "traceId": "t1",
            "gatewayName": "WEBPAY"
        }
    }))
    .await;

    assert_eq!(kind, None);
    let url = json["data"]["url"].as_str().unwrap();
    assert!(url.starts_with("https://payment.odihnx.com/pay/"));
}

#[tokio::test]
async fn open_document() {
    let (_, json) = run(json!({
        "operation": "executeOpen",
        "arguments": { "serviceName": "locker-app", "currentCode": "ABC123DEF" }
    }))
    .await;

    assert_eq!(json["data"]["openStatus"], json!("OPEN_STATUS_SUCCESS"));
    assert_eq!(json["data"]["message"], json!("Locker abierto exitosamente"));
    assert_eq!(json["data"]["interrupted"], json!(false));
}

#[tokio::test]
async fn booking_status_document() {
    let (_, json) = run(json!({
        "operation": "checkBookingStatus",
        "arguments": { "serviceName": "locker-app", "currentCode": "ABC123DEF" }
    }))
    .await;

    let booking = &json["data"]["booking"];
    assert_eq!(booking["configurationBookingId"], json!(456));
    assert_eq!(booking["emailRecipient"], json!("usuario@odihnx.com"));
}

#[rstest]
#[case(json!({ "operation": "getPaymentInfraByQrValue" }), "qrValue")]
#[case(json!({ "operation": "getAvailableLockers", "arguments": { "rackId": 1, "traceId": "t" } }), "bookingTimeId")]
#[case(json!({ "operation": "validateDiscountCoupon", "arguments": { "couponCode": "X", "traceId": "t" } }), "rackId")]
#[case(json!({ "operation": "generateBooking", "arguments": { "rackIdReference": 1, "groupId": 1, "email": "e" , "traceId": "t" } }), "phone")]
#[case(json!({ "operation": "generatePurchaseOrder", "arguments": { "rackIdReference": 1, "groupId": 1, "email": "e", "phone": "p", "traceId": "t" } }), "gatewayName")]
#[case(json!({ "operation": "checkBookingStatus", "arguments": { "currentCode": "ABC" } }), "serviceName")]
#[tokio::test]
async fn missing_arguments_name_the_field(#[case] document: Value, #[case] field: &str) {
    let (kind, json) = run(document).await;
    assert_eq!(kind, Some(ErrorKind::InvalidInput));
    assert_eq!(json["error"]["message"], json!(format!("invalid input: {field}")));
}

#[tokio::test]
async fn operation_failure_document() {
    let gateways = Gateways::offline(Duration::from_secs(5));
    let api = Api::new(Arc::new(strict_payments()), gateways.booking);
    let outcome = api.handle(json!({
        "operation": "validateDiscountCoupon",
        "arguments": { "couponCode": "NOPE", "rackId": 1, "traceId": "t1" }
    }))
    .await;
    let kind = outcome.error_kind();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(kind, Some(ErrorKind::OperationFailed));
    assert_eq!(json["error"]["code"], json!("INVALID_COUPON"));
    assert_eq!(json["error"]["kind"], json!("OPERATION_FAILED"));
    assert_eq!(json["error"]["retryable"], json!(false));
}

#[tokio::test]
async fn every_listed_operation_dispatches() {
    for name in NAMES {
        let (kind, json) = run(json!({ "operation": name })).await;
        // Empty arguments never pass validation, but they must reach it.
        assert_eq!(kind, Some(ErrorKind::InvalidInput), "{name}");
        assert_eq!(json["error"]["code"], json!("INVALID_INPUT"), "{name}");
    }
}
