//! Bearer-token session handling and the refresh-and-retry HTTP client.

pub mod client;
pub mod session;

pub use client::{ApiError, AuthClient};
pub use session::Session;
