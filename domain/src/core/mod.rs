//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: file name sanitizing and number formatting

pub mod error;
pub mod string;
