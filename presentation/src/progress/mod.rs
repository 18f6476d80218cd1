//! Progress display for protocol generation

pub mod reporter;
