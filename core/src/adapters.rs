//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`crate::ports`] and the request surface
//! built on top of the application services.
//!
//! * **[`inbound`]** (Driving): the JSON operation surface used by HTTP and the CLI.
//! * **[`outbound`]** (Driven): the gRPC backends, plus canned stand-ins for offline runs.
//!
//! ## Rules
//! * Outbound adapters **MUST** only depend on `ports`, the domain model and the wire types.
//! * Inbound adapters call Application Services and never reach a backend directly.

pub mod inbound;
pub mod outbound;
