//! Rate limiting implementations.

mod disabled;
mod memory;

pub use disabled::DisabledRateLimiter;
pub use memory::{ADMISSION_WINDOW, InMemoryRateLimiter};
