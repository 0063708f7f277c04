//! # Timeline Shared
//!
//! Wire types of the timeline HTTP API, shared by the server and any client.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
