//! # Timeline Infrastructure
//!
//! Concrete implementations of the ports defined in `timeline-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL post store via SeaORM
//! - `test-helpers` - Exposes [`clock::MockClock`] outside this crate

pub mod clock;
pub mod database;
pub mod rate_limit;

pub use clock::SystemClock;
pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use rate_limit::{ADMISSION_WINDOW, DisabledRateLimiter, InMemoryRateLimiter};

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
