//! # Ports Layer (Boundaries)
//!
//! Defines the traits that isolate the application from the backends.
//!
//! ## Dependency Rule
//! * The Application depends on these Ports.
//! * The Adapters implement these Ports.
//! * This inverts the control flow, keeping the core isolated.
//!
//! Inbound traffic does not get a port of its own: the inbound adapters call the
//! application services directly, the same way for HTTP and for the command line.

pub mod outbound;
