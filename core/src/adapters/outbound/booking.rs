use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{debug, warn};

use paybff_common::DomainError;
use paybff_common::input::Text;
use paybff_common::model::{BookingStatusCheck, ExecuteOpenResult};
use paybff_protocols::booking::{CheckBookingStatusRequest, ExecuteOpenRequest, ExecuteOpenResponse};

use super::backend::BookingBackend;
use super::stream::{Drained, drain_last};
use super::translate::{self, Lookup, envelope, transport_failure, within, within_deadline};
use crate::ports::outbound::BookingGateway;

/// [`BookingGateway`] over any wire-level booking backend.
pub struct BookingAdapter<B> {
    backend: B,
    timeout: Duration,
}

impl<B: BookingBackend> BookingAdapter<B> {
    pub fn new(backend: B, timeout: Duration) -> Self {
        Self { backend, timeout }
    }
}

const OPEN: &str = "execute_open";

fn open_result(message: ExecuteOpenResponse, interrupted: bool) -> Result<ExecuteOpenResult, DomainError> {
    let open_status = translate::open_status(message.status);
    let header = envelope(message.response, OPEN, DomainError::ExecuteOpenFailed)?;
    Ok(ExecuteOpenResult {
        transaction_id: header.transaction_id,
        message: header.message,
        status: header.status,
        open_status,
        interrupted,
    })
}

#[async_trait]
impl<B: BookingBackend> BookingGateway for BookingAdapter<B> {
    async fn check_booking_status(
        &self,
        service_name: &Text,
        current_code: &Text,
    ) -> Result<BookingStatusCheck, DomainError> {
        const OP: &str = "check_booking_status";
        debug!(operation = OP, service = %service_name, "Calling booking service");

        let request = CheckBookingStatusRequest {
            service_name: service_name.to_string(),
            current_code: current_code.to_string(),
        };
        let response = within(
            self.timeout,
            OP,
            Lookup::Booking,
            self.backend.check_booking_status(request),
        )
        .await?;
        let header = envelope(response.response, OP, DomainError::BookingNotFound)?;

        Ok(BookingStatusCheck {
            transaction_id: header.transaction_id,
            message: header.message,
            status: header.status,
            booking: response.booking.map(translate::booking_status),
        })
    }

    async fn execute_open(
        &self,
        service_name: &Text,
        current_code: &Text,
    ) -> Result<ExecuteOpenResult, DomainError> {
        debug!(operation = OPEN, service = %service_name, "Calling booking service");

        // Opening and draining share one deadline.
        let deadline = Instant::now() + self.timeout;
        let request = ExecuteOpenRequest {
            service_name: service_name.to_string(),
            current_code: current_code.to_string(),
        };
        let stream = within_deadline(
            deadline,
            OPEN,
            Lookup::Booking,
            self.backend.execute_open(request),
        )
        .await?;

        match drain_last(stream, deadline).await {
            Drained::Complete(last) => open_result(last, false),
            Drained::Interrupted { last, status } => {
                warn!(
                    operation = OPEN,
                    code = ?status.code(),
                    detail = status.message(),
                    "Open stream ended early; keeping last reported state"
                );
                open_result(last, true)
            }
            Drained::Empty => {
                warn!(operation = OPEN, "Open stream closed without any message");
                Err(DomainError::ServiceUnavailable)
            }
            Drained::Failed(status) => Err(transport_failure(OPEN, &status, Lookup::Booking)),
            Drained::TimedOut => {
                warn!(operation = OPEN, "Open stream timed out before any message");
                Err(DomainError::ServiceUnavailable)
            }
        }
    }
}
