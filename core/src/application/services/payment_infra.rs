use std::sync::Arc;

use paybff_common::DomainError;
use paybff_common::input::{Checkout, Id, Text};
use paybff_common::model::{
    AvailableLockers, Booking, DiscountCouponValidation, PaymentInfra, PurchaseOrder,
    PurchaseOrderData,
};

use crate::ports::outbound::PaymentGateway;

/// Raw checkout arguments as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutArgs {
    pub rack_id_reference: i64,
    pub group_id: i64,
    pub coupon_code: Option<String>,
    pub email: String,
    pub phone: String,
    pub trace_id: String,
}

impl CheckoutArgs {
    fn validate(&self) -> Result<Checkout, DomainError> {
        Ok(Checkout {
            rack_id_reference: Id::parse("rackIdReference", self.rack_id_reference)?,
            group_id: Id::parse("groupId", self.group_id)?,
            coupon_code: Text::parse_optional(self.coupon_code.as_deref()),
            email: Text::parse("email", &self.email)?,
            phone: Text::parse("phone", &self.phone)?,
            trace_id: Text::parse("traceId", &self.trace_id)?,
        })
    }
}

pub struct PaymentInfraService {
    gateway: Arc<dyn PaymentGateway>,
}

impl PaymentInfraService {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn get_payment_infra_by_qr_value(
        &self,
        qr_value: &str,
    ) -> Result<PaymentInfra, DomainError> {
        let qr_value = Text::parse("qrValue", qr_value)?;
        self.gateway.get_payment_infra_by_qr_value(&qr_value).await
    }

    pub async fn get_available_lockers(
        &self,
        rack_id: i64,
        booking_time_id: i64,
        trace_id: &str,
    ) -> Result<AvailableLockers, DomainError> {
        let rack_id = Id::parse("rackId", rack_id)?;
        let booking_time_id = Id::parse("bookingTimeId", booking_time_id)?;
        let trace_id = Text::parse("traceId", trace_id)?;
        self.gateway
            .get_available_lockers(rack_id, booking_time_id, &trace_id)
            .await
    }

    pub async fn validate_discount_coupon(
        &self,
        coupon_code: &str,
        rack_id: i64,
        trace_id: &str,
    ) -> Result<DiscountCouponValidation, DomainError> {
        let coupon_code = Text::parse("couponCode", coupon_code)?;
        let rack_id = Id::parse("rackId", rack_id)?;
        let trace_id = Text::parse("traceId", trace_id)?;
        self.gateway
            .validate_discount_coupon(&coupon_code, rack_id, &trace_id)
            .await
    }

    /// Produces the payment URL the client is redirected to.
    ///
    /// Not idempotent: a call abandoned by the caller may still create an order.
    pub async fn generate_purchase_order(
        &self,
        args: &CheckoutArgs,
        gateway_name: &str,
    ) -> Result<PurchaseOrder, DomainError> {
        let checkout = args.validate()?;
        let gateway_name = Text::parse("gatewayName", gateway_name)?;
        self.gateway
            .generate_purchase_order(&checkout, &gateway_name)
            .await
    }

    pub async fn generate_booking(&self, args: &CheckoutArgs) -> Result<Booking, DomainError> {
        let checkout = args.validate()?;
        self.gateway.generate_booking(&checkout).await
    }

    pub async fn get_purchase_order_by_po(
        &self,
        purchase_order: &str,
        trace_id: &str,
    ) -> Result<PurchaseOrderData, DomainError> {
        let purchase_order = Text::parse("purchaseOrder", purchase_order)?;
        let trace_id = Text::parse("traceId", trace_id)?;
        self.gateway
            .get_purchase_order_by_po(&purchase_order, &trace_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use paybff_common::model::ResponseStatus;
    use rstest::rstest;
    use std::sync::Mutex;

    /// Fails the test if validation ever lets a call through.
    struct Unreachable;

    #[async_trait]
    impl PaymentGateway for Unreachable {
        async fn get_payment_infra_by_qr_value(&self, _: &Text) -> Result<PaymentInfra, DomainError> {
            panic!("gateway must not be called")
        }
        async fn get_available_lockers(&self, _: Id, _: Id, _: &Text) -> Result<AvailableLockers, DomainError> {
            panic!("gateway must not be called")
        }
        async fn validate_discount_coupon(&self, _: &Text, _: Id, _: &Text) -> Result<DiscountCouponValidation, DomainError> {
            panic!("gateway must not be called")
        }
        async fn generate_purchase_order(&self, _: &Checkout, _: &Text) -> Result<PurchaseOrder, DomainError> {
            panic!("gateway must not be called")
        }
        async fn generate_booking(&self, _: &Checkout) -> Result<Booking, DomainError> {
            panic!("gateway must not be called")
        }
        async fn get_purchase_order_by_po(&self, _: &Text, _: &Text) -> Result<PurchaseOrderData, DomainError> {
            panic!("gateway must not be called")
        }
    }

    /// Records the checkout it received and answers with a canned error or value.
    #[derive(Default)]
    struct Recording {
        checkout: Mutex<Option<Checkout>>,
        fail_with: Option<DomainError>,
    }

    #[async_trait]
    impl PaymentGateway for Recording {
        async fn get_payment_infra_by_qr_value(&self, qr_value: &Text) -> Result<PaymentInfra, DomainError> {
            match &self.fail_with {
                Some(error) => Err(error.clone()),
                None => Ok(PaymentInfra {
                    transaction_id: "tx-123".to_string(),
                    message: qr_value.to_string(),
                    status: ResponseStatus::Ok,
                    ..PaymentInfra::default()
                }),
            }
        }
        async fn get_available_lockers(&self, _: Id, _: Id, _: &Text) -> Result<AvailableLockers, DomainError> {
            Err(DomainError::NoLockersAvailable)
        }
        async fn validate_discount_coupon(&self, _: &Text, _: Id, _: &Text) -> Result<DiscountCouponValidation, DomainError> {
            Err(DomainError::InvalidCoupon)
        }
        async fn generate_purchase_order(&self, checkout: &Checkout, _: &Text) -> Result<PurchaseOrder, DomainError> {
            *self.checkout.lock().unwrap() = Some(checkout.clone());
            Ok(PurchaseOrder::default())
        }
        async fn generate_booking(&self, checkout: &Checkout) -> Result<Booking, DomainError> {
            *self.checkout.lock().unwrap() = Some(checkout.clone());
            Ok(Booking::default())
        }
        async fn get_purchase_order_by_po(&self, _: &Text, _: &Text) -> Result<PurchaseOrderData, DomainError> {
            Err(DomainError::PurchaseOrderNotFound)
        }
    }

    fn guarded() -> PaymentInfraService {
        PaymentInfraService::new(Arc::new(Unreachable))
    }

    fn checkout() -> CheckoutArgs {
        CheckoutArgs {
            rack_id_reference: 1,
            group_id: 2,
            coupon_code: None,
            email: "user@odihnx.com".to_string(),
            phone: "+56912345678".to_string(),
            trace_id: "t1".to_string(),
        }
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn blank_qr_value_is_rejected(#[case] qr_value: &str) {
        let result = guarded().get_payment_infra_by_qr_value(qr_value).await;
        assert_eq!(result, Err(DomainError::invalid_input("qrValue")));
    }

    #[rstest]
    #[case(0, 1, "t1", "rackId")]
    #[case(-4, 1, "t1", "rackId")]
    #[case(1, 0, "t1", "bookingTimeId")]
    #[case(1, -1, "t1", "bookingTimeId")]
    #[case(1, 1, " ", "traceId")]
    #[tokio::test]
    async fn available_lockers_arguments_are_checked(
        #[case] rack_id: i64,
        #[case] booking_time_id: i64,
        #[case] trace_id: &str,
        #[case] field: &'static str,
    ) {
        let result = guarded()
            .get_available_lockers(rack_id, booking_time_id, trace_id)
            .await;
        assert_eq!(result, Err(DomainError::invalid_input(field)));
    }

    #[rstest]
    #[case("", 1, "t1", "couponCode")]
    #[case("DESCUENTO10", 0, "t1", "rackId")]
    #[case("DESCUENTO10", 1, "", "traceId")]
    #[tokio::test]
    async fn coupon_arguments_are_checked(
        #[case] coupon_code: &str,
        #[case] rack_id: i64,
        #[case] trace_id: &str,
        #[case] field: &'static str,
    ) {
        let result = guarded()
            .validate_discount_coupon(coupon_code, rack_id, trace_id)
            .await;
        assert_eq!(result, Err(DomainError::invalid_input(field)));
    }

    #[rstest]
    #[case(CheckoutArgs { rack_id_reference: 0, ..checkout() }, "WEBPAY", "rackIdReference")]
    #[case(CheckoutArgs { group_id: -2, ..checkout() }, "WEBPAY", "groupId")]
    #[case(CheckoutArgs { email: " ".to_string(), ..checkout() }, "WEBPAY", "email")]
    #[case(CheckoutArgs { phone: String::new(), ..checkout() }, "WEBPAY", "phone")]
    #[case(CheckoutArgs { trace_id: "\t".to_string(), ..checkout() }, "WEBPAY", "traceId")]
    #[case(checkout(), "  ", "gatewayName")]
    #[tokio::test]
    async fn purchase_order_arguments_are_checked(
        #[case] args: CheckoutArgs,
        #[case] gateway_name: &str,
        #[case] field: &'static str,
    ) {
        let result = guarded().generate_purchase_order(&args, gateway_name).await;
        assert_eq!(result, Err(DomainError::invalid_input(field)));
    }

    #[rstest]
    #[case(CheckoutArgs { rack_id_reference: -1, ..checkout() }, "rackIdReference")]
    #[case(CheckoutArgs { group_id: 0, ..checkout() }, "groupId")]
    #[case(CheckoutArgs { email: String::new(), ..checkout() }, "email")]
    #[case(CheckoutArgs { trace_id: String::new(), ..checkout() }, "traceId")]
    #[tokio::test]
    async fn booking_arguments_are_checked(#[case] args: CheckoutArgs, #[case] field: &'static str) {
        let result = guarded().generate_booking(&args).await;
        assert_eq!(result, Err(DomainError::invalid_input(field)));
    }

    #[rstest]
    #[case("", "t1", "purchaseOrder")]
    #[case("OC-1", "  ", "traceId")]
    #[tokio::test]
    async fn purchase_order_lookup_arguments_are_checked(
        #[case] purchase_order: &str,
        #[case] trace_id: &str,
        #[case] field: &'static str,
    ) {
        let result = guarded()
            .get_purchase_order_by_po(purchase_order, trace_id)
            .await;
        assert_eq!(result, Err(DomainError::invalid_input(field)));
    }

    #[tokio::test]
    async fn gateway_result_is_passed_through() {
        let service = PaymentInfraService::new(Arc::new(Recording::default()));
        let infra = service.get_payment_infra_by_qr_value(" QR-1 ").await.unwrap();
        assert_eq!(infra.transaction_id, "tx-123");
        assert_eq!(infra.message, "QR-1");
    }

    #[tokio::test]
    async fn gateway_error_is_passed_through() {
        let gateway = Recording {
            fail_with: Some(DomainError::PaymentRackNotFound),
            ..Recording::default()
        };
        let service = PaymentInfraService::new(Arc::new(gateway));
        let result = service.get_payment_infra_by_qr_value("QR-404").await;
        assert_eq!(result, Err(DomainError::PaymentRackNotFound));

        let result = service.get_purchase_order_by_po("OC-1", "t1").await;
        assert_eq!(result, Err(DomainError::PurchaseOrderNotFound));
    }

    #[tokio::test]
    async fn blank_coupon_on_checkout_is_dropped() {
        let gateway = Arc::new(Recording::default());
        let service = PaymentInfraService::new(gateway.clone());
        let args = CheckoutArgs {
            coupon_code: Some("  ".to_string()),
            ..checkout()
        };

        service.generate_booking(&args).await.unwrap();

        let seen = gateway.checkout.lock().unwrap().clone().unwrap();
        assert_eq!(seen.coupon_code, None);
        assert_eq!(seen.group_id.get(), 2);
    }
}
