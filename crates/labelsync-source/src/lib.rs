//! Label document source.
//!
//! Retrieves the raw label document from its remote location.

#![warn(clippy::all)]

mod errors;
mod http;
mod interface;

pub use errors::{Result, SourceError};
pub use http::HttpSourceService;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockSourceService;
pub use interface::SourceService;
