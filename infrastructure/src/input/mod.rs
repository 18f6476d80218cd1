//! Meeting data input adapters

mod json_loader;

pub use json_loader::{InputError, JsonInputLoader};
