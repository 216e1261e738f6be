//! # errep Infrastructure Layer
//!
//! Cross-cutting concerns and the composition root:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`config`] | Layered figment configuration (defaults, TOML, `ERREP__*` env) |
//! | [`logging`] | tracing subscriber setup |
//! | [`bootstrap`] | Adapter resolution and use case wiring |
//! | [`error_ext`] | Context helpers mapping foreign errors to domain errors |

// Force-link errep-providers so its linkme registrations are present
extern crate errep_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

pub use bootstrap::{AppContext, init_app};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
