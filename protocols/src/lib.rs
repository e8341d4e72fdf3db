//! Wire format of the two backend services the BFF talks to.
//!
//! * [`payment`]: payment infrastructure, lockers, coupons and purchase orders.
//! * [`booking`]: booking status and locker opening.
//! * [`client`]: gRPC client stubs for both services.
//!
//! Enumerated fields are carried as raw `i32`, exactly as they travel on the
//! wire. Converting them into closed Rust enums is left to the callers, which
//! must cope with values they do not know.

pub mod booking;
pub mod client;
pub mod payment;

pub use client::{BookingServiceClient, PaymentManagerClient};
