//! # Application Layer (Service Layer)
//!
//! This layer holds the use cases exposed to the frontend.
//!
//! ## Purpose
//! It acts as the "API" for the domain. It does not contain business rules
//! (pricing, coupons and inventory belong to the backends), but rather:
//! 1. Receives a call from an Inbound Adapter.
//! 2. Validates inputs into [`paybff_common::input`] values.
//! 3. Calls the appropriate Outbound Port.
//! 4. Returns the result, or the port's error unchanged.
//!
//! ## Contents
//! * **[`services`]**: Grouped by the backend they front.

pub mod services;
