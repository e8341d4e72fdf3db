pub mod call;
pub mod serve;

use std::convert::Infallible;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use paybff_common::config::{BackendConfig, join_address};

#[derive(Parser)]
#[command(name = "paybff")]
#[command(about = "Backend-for-frontend for locker payments and bookings.")]
pub struct CommandLine {
    #[command(flatten)]
    pub backend: BackendArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct BackendArgs {
    /// Host of the payment service
    #[arg(long, env = "HOST_API_PAYMENT", default_value = "localhost", global = true)]
    pub payment_host: String,

    /// Port of the payment service
    #[arg(long, env = "PORT_API_PAYMENT", default_value_t = 50051, global = true)]
    pub payment_port: u16,

    /// Host of the booking service
    #[arg(long, env = "HOST_API_BOOKING", default_value = "localhost", global = true)]
    pub booking_host: String,

    /// Port of the booking service
    #[arg(long, env = "PORT_API_BOOKING", default_value_t = 50052, global = true)]
    pub booking_port: u16,

    /// Upper bound for each backend call, in milliseconds
    #[arg(long, env = "BACKEND_TIMEOUT_MS", default_value_t = 30_000, global = true)]
    pub timeout_ms: u64,

    /// Serve stand-in data instead of calling the backends (`--offline=false` to go live)
    #[arg(
        long,
        env = "USE_MOCK",
        default_value_t = true,
        value_parser = offline_mode,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        global = true
    )]
    pub offline: bool,
}

/// Only an explicit `false` leaves offline mode; any other value keeps it.
fn offline_mode(raw: &str) -> Result<bool, Infallible> {
    Ok(raw.trim() != "false")
}

impl BackendArgs {
    pub fn config(&self) -> BackendConfig {
        BackendConfig {
            payment_service_address: join_address(&self.payment_host, self.payment_port),
            booking_service_address: join_address(&self.booking_host, self.booking_port),
            timeout: Duration::from_millis(self.timeout_ms),
            offline: self.offline,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the operations over HTTP
    #[command(alias = "s")]
    Serve {
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },
    /// Run one operation document, e.g. '{"operation":"executeOpen","arguments":{...}}'
    #[command(alias = "c")]
    Call { document: String },
    /// List the operations that can be called
    #[command(alias = "o")]
    Operations,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
