use std::sync::Arc;

use paybff_common::DomainError;
use paybff_common::input::Text;
use paybff_common::model::{BookingStatusCheck, ExecuteOpenResult};
use tracing::info;

use crate::ports::outbound::BookingGateway;

/// Gives a booking holder access to the locker they rented.
pub struct LockerAccessService {
    gateway: Arc<dyn BookingGateway>,
}

impl LockerAccessService {
    pub fn new(gateway: Arc<dyn BookingGateway>) -> Self {
        Self { gateway }
    }

    pub async fn check_booking_status(
        &self,
        service_name: &str,
        current_code: &str,
    ) -> Result<BookingStatusCheck, DomainError> {
        let service_name = Text::parse("serviceName", service_name)?;
        let current_code = Text::parse("currentCode", current_code)?;
        self.gateway
            .check_booking_status(&service_name, &current_code)
            .await
    }

    /// Asks the booking service to physically open the locker.
    ///
    /// Resolves once the backend has stopped reporting progress; inspect
    /// `open_status` to know whether the door actually opened.
    pub async fn execute_open(
        &self,
        service_name: &str,
        current_code: &str,
    ) -> Result<ExecuteOpenResult, DomainError> {
        let service_name = Text::parse("serviceName", service_name)?;
        let current_code = Text::parse("currentCode", current_code)?;
        let result = self
            .gateway
            .execute_open(&service_name, &current_code)
            .await?;
        info!(
            service = %service_name,
            open_status = ?result.open_status,
            "Locker opening finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use paybff_common::model::{OpenStatus, ResponseStatus};
    use rstest::rstest;

    struct Unreachable;

    #[async_trait]
    impl BookingGateway for Unreachable {
        async fn check_booking_status(&self, _: &Text, _: &Text) -> Result<BookingStatusCheck, DomainError> {
            panic!("gateway must not be called")
        }
        async fn execute_open(&self, _: &Text, _: &Text) -> Result<ExecuteOpenResult, DomainError> {
            panic!("gateway must not be called")
        }
    }

    struct Fixed(Result<ExecuteOpenResult, DomainError>);

    #[async_trait]
    impl BookingGateway for Fixed {
        async fn check_booking_status(&self, _: &Text, _: &Text) -> Result<BookingStatusCheck, DomainError> {
            Err(DomainError::BookingNotFound)
        }
        async fn execute_open(&self, _: &Text, _: &Text) -> Result<ExecuteOpenResult, DomainError> {
            self.0.clone()
        }
    }

    #[rstest]
    #[case("", "ABC123DEF", "serviceName")]
    #[case("locker-app", "  ", "currentCode")]
    #[tokio::test]
    async fn status_arguments_are_checked(
        #[case] service_name: &str,
        #[case] current_code: &str,
        #[case] field: &'static str,
    ) {
        let service = LockerAccessService::new(Arc::new(Unreachable));
        let result = service.check_booking_status(service_name, current_code).await;
        assert_eq!(result, Err(DomainError::invalid_input(field)));
    }

    #[rstest]
    #[case(" ", "ABC123DEF", "serviceName")]
    #[case("locker-app", "", "currentCode")]
    #[tokio::test]
    async fn open_arguments_are_checked(
        #[case] service_name: &str,
        #[case] current_code: &str,
        #[case] field: &'static str,
    ) {
        let service = LockerAccessService::new(Arc::new(Unreachable));
        let result = service.execute_open(service_name, current_code).await;
        assert_eq!(result, Err(DomainError::invalid_input(field)));
    }

    #[tokio::test]
    async fn open_result_is_passed_through() {
        let expected = ExecuteOpenResult {
            transaction_id: "tx".to_string(),
            message: "Locker abierto exitosamente".to_string(),
            status: ResponseStatus::Ok,
            open_status: OpenStatus::Success,
            interrupted: false,
        };
        let service = LockerAccessService::new(Arc::new(Fixed(Ok(expected.clone()))));
        assert_eq!(service.execute_open("app", "ABC").await, Ok(expected));
    }

    #[tokio::test]
    async fn gateway_errors_are_passed_through() {
        let service =
            LockerAccessService::new(Arc::new(Fixed(Err(DomainError::ServiceUnavailable))));
        assert_eq!(
            service.execute_open("app", "ABC").await,
            Err(DomainError::ServiceUnavailable)
        );
        assert_eq!(
            service.check_booking_status("app", "ABC").await,
            Err(DomainError::BookingNotFound)
        );
    }
}
