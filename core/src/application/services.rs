//! # Application Services
//!
//! Each public method is one operation of the external interface.
//!
//! * **Validation gate**: arguments are checked in order and the first failure
//!   is returned before any port is touched.
//! * **Pass-through**: port results and errors are returned as they are. No retries.
//! * **Stateless**: services only hold shared, immutable port handles, so they
//!   can serve any number of concurrent requests.
//!
//! ## Available Services
//! * [`payment_infra::PaymentInfraService`]: racks, lockers, coupons and purchase orders.
//! * [`locker_access::LockerAccessService`]: booking status and locker opening.

pub mod locker_access;
pub mod payment_infra;
