//! Command functions: one per user action, returning serializable DTOs and
//! string errors for the UI boundary.

pub mod dto;
pub mod error;
pub mod history;
pub mod model_info;
pub mod report;
pub mod scan;

pub use error::map_err;
