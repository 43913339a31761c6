//! Puzzle input downloads from the Advent of Code website.
//!
//! Inputs are requested with the user's session cookie over rustls. A
//! puzzle answers with an error status until it unlocks, so
//! [`AocClient::fetch_input`] retries according to a [`RetryPolicy`]
//! (five attempts one second apart by default) and logs each miss as a
//! `tracing` warning.
//!
//! ```no_run
//! use aoc_http_client::{AocClient, RetryPolicy};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), aoc_http_client::AocError> {
//! let client = AocClient::builder()
//!     .retry_policy(RetryPolicy { attempts: 10, backoff: Duration::from_secs(2) })
//!     .build()?;
//! let input = client.fetch_input(2022, 1, "your_session_cookie")?;
//! println!("{} lines", input.lines().count());
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod retry;

pub use client::{AocClient, AocClientBuilder};
pub use error::AocError;
pub use retry::RetryPolicy;
