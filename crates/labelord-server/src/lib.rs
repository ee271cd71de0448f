//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
mod debug;
pub mod errors;
mod event_type;
pub mod ghapi;
mod index;
mod metrics;
pub mod middlewares;
pub mod server;
mod webhook;

pub use errors::{Result, ServerError};
pub use metrics::ServerMetrics;
pub use server::{run_server, AppContext};
