//! # paybff core
//!
//! A backend-for-frontend sitting between payment/locker clients and two gRPC
//! services, organised as a **Hexagonal Architecture**.
//!
//! ## Architecture Overview
//! * **[`application`]**: the eight use cases. Validates arguments and delegates.
//!     * *Application Layer*.
//! * **[`ports`]**: capability traits for the payment and booking services.
//!     * *Boundaries of the Hexagon*.
//! * **[`adapters`]**: gRPC and stand-in backends, the external schema and operation dispatch.
//!     * *Outside the Hexagon*.
//!
//! The domain model and error taxonomy live in `paybff-common`; wire messages in
//! `paybff-protocols`.

pub mod adapters;
pub mod application;
pub mod ports;
