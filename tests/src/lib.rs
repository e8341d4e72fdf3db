//! End-to-end checks of the BFF wired against its stand-in backends.
//!
//! Nothing here needs a network: the stand-ins answer at the wire level, so
//! every test still goes through validation, translation and mapping.

mod support;

mod flows {
    mod integration;
}

mod operations {
    mod integration;
}
