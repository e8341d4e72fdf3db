//! # Inbound Adapters
//!
//! The request surface of the BFF, independent of any transport.
//!
//! * **[`schema`]**: the response shapes clients see.
//! * **[`mapper`]**: domain values → schema.
//! * **[`query`]**: operation names → application services.
//!
//! The HTTP server and the command line in the `cli` crate both drive [`query::Api`].

pub mod mapper;
pub mod query;
pub mod schema;
