//! # Outbound Adapters
//!
//! Implementations of [`crate::ports::outbound`] for the two backend services.
//!
//! ```text
//!   PaymentGateway / BookingGateway        (ports, domain types)
//!                 │
//!   PaymentInfraAdapter / BookingAdapter   (timeouts, envelope, translation)
//!                 │
//!   PaymentBackend / BookingBackend        (wire types, tonic::Status)
//!         ┌───────┴────────┐
//!      grpc::*         standin::*
//! ```
//!
//! Both backend flavours feed the same translating adapter, so offline runs
//! exercise the exact code path used in production.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tonic::transport::{Channel, Endpoint};
use tracing::info;

use paybff_common::config::{BackendConfig, ConfigError};

use crate::ports::outbound::{BookingGateway, PaymentGateway};

pub mod backend;
pub mod booking;
pub mod grpc;
pub mod payment;
pub mod standin;
pub mod stream;
pub mod translate;

pub use booking::BookingAdapter;
pub use payment::PaymentInfraAdapter;

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot reach {service} at {address}")]
    Unreachable {
        service: &'static str,
        address: String,
        #[source]
        source: tonic::transport::Error,
    },
}

/// Both gateways, ready to be injected into the application services.
#[derive(Clone)]
pub struct Gateways {
    pub payment: Arc<dyn PaymentGateway>,
    pub booking: Arc<dyn BookingGateway>,
}

impl Gateways {
    /// Canned responses, no network.
    pub fn offline(timeout: Duration) -> Self {
        Self {
            payment: Arc::new(PaymentInfraAdapter::new(
                standin::StandInPaymentBackend::new(),
                timeout,
            )),
            booking: Arc::new(BookingAdapter::new(
                standin::StandInBookingBackend::new(),
                timeout,
            )),
        }
    }

    /// Builds the gateways described by `config`.
    ///
    /// Online, both services must accept a connection within the configured
    /// timeout. Connections are released when the last clone is dropped.
    pub async fn connect(config: &BackendConfig) -> Result<Self, ConnectError> {
        config.validate()?;

        if config.offline {
            info!("Backends offline, serving stand-in data");
            return Ok(Self::offline(config.timeout));
        }

        let payment = dial("payment service", &config.payment_service_address, config.timeout).await?;
        let booking = dial("booking service", &config.booking_service_address, config.timeout).await?;

        Ok(Self {
            payment: Arc::new(PaymentInfraAdapter::new(
                grpc::GrpcPaymentBackend::new(payment),
                config.timeout,
            )),
            booking: Arc::new(BookingAdapter::new(
                grpc::GrpcBookingBackend::new(booking),
                config.timeout,
            )),
        })
    }
}

/// Plain `host:port` addresses are dialled over cleartext HTTP/2.
fn endpoint_uri(address: &str) -> String {
    let address = address.trim();
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{address}")
    }
}

async fn dial(service: &'static str, address: &str, timeout: Duration) -> Result<Channel, ConnectError> {
    let unreachable = |source| ConnectError::Unreachable {
        service,
        address: address.to_string(),
        source,
    };

    let channel = Endpoint::from_shared(endpoint_uri(address))
        .map_err(unreachable)?
        .connect_timeout(timeout)
        .timeout(timeout)
        .connect()
        .await
        .map_err(unreachable)?;

    info!(%service, %address, "Connected");
    Ok(channel)
}
