//! # Domain Model
//!
//! Canonical in-process representations of every business object the BFF hands
//! around. They are independent of both the backend wire format and the
//! external schema.
//!
//! ## Entities
//! * [`infra::PaymentInfra`]: a payment rack, its installation and the rental tiers it offers.
//! * [`lockers::AvailableLockers`]: locker groups that can still be rented.
//! * [`order::PurchaseOrder`], [`order::Booking`], [`order::PurchaseOrderData`]: the checkout flow.
//! * [`booking::BookingStatusCheck`], [`booking::ExecuteOpenResult`]: access to a rented locker.
//!
//! ## Design Principles
//! * **Values, not entities**: everything is produced fresh per request and never mutated afterwards.
//! * **Status is data**: [`status::ResponseStatus`] is what the backend reported, it is not an error.

pub mod booking;
pub mod infra;
pub mod lockers;
pub mod order;
pub mod status;

pub use booking::{BookingStatusCheck, BookingStatusData, ExecuteOpenResult};
pub use infra::{BookingTime, Installation, PaymentInfra, PaymentRack};
pub use lockers::{AvailableLockers, AvailablePaymentGroup};
pub use order::{Booking, DiscountCouponValidation, PurchaseOrder, PurchaseOrderData};
pub use status::{OpenStatus, ResponseStatus, UnitMeasurement};
