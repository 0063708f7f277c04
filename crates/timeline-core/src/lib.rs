//! # Timeline Core
//!
//! The domain layer of the portfolio timeline.
//! This crate contains the validation rules, the admission contract and the
//! post lifecycle, with no infrastructure dependencies. Storage, clocks and
//! rate limiting are reached through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;
pub mod validation;

pub use error::{RepoError, TimelineError, ValidationError};
pub use service::TimelineService;
