//! # Infrastructure Layer
//!
//! Concrete adapters for the FitTrack core:
//! - **Configuration**: layered loading with `config` and `dotenvy`
//! - **Telemetry**: `tracing-subscriber` setup
//! - **Persistence**: in-memory user and session storage
//! - **Mail**: verification mail delivery
//!
//! [`initialize`] wires all of them into [`AppServices`].

pub mod app;
pub mod config;
pub mod error;
pub mod mailer;
pub mod persistence;
pub mod telemetry;

pub use app::{initialize, AppServices};
pub use error::InfraError;
pub use mailer::TracingVerificationMailer;
pub use persistence::{InMemorySessionRepository, InMemoryUserRepository};
