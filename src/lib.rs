//! # SafeAwait
//!
//! Await a fallible future and get a plain [`Result`] back, with optional transforms and a deadline.
//!
//! ## Features
//!
//! 1. Transforms
//!
//! The success value can be reshaped synchronously ([`SafeAwait::on_success`]), asynchronously
//! ([`SafeAwait::on_success_async`]), or fallibly ([`SafeAwait::try_on_success`]); the error can be
//! reshaped with [`SafeAwait::on_error`].
//!
//! 2. Deadline
//!
//! With a timeout set, the operation races a timer. Whichever settles first decides the outcome and
//! the loser is released right away. A missed deadline is reported as [`SafeErr::Timeout`], which is
//! never passed through `on_error`, so callers can branch on it without looking at messages.
//!
//! 3. Async runtime
//!
//! The timer comes from [`safe_await_runtime`], which supports both `tokio` (the default) and
//! `async-std`, chosen by the `runtime-tokio` / `runtime-async-std` features.
//!
//! ## Example
//!
//! ```
//! # async fn example() {
//! use safe_await::{safe_await, SafeAwaitExt, SafeErr};
//!
//! let result = safe_await(async { Err::<u32, _>("boom") }).await;
//! assert_eq!(result, Err(SafeErr::Failed("boom")));
//!
//! let result = async { Ok::<_, std::io::Error>(5) }
//!     .safe()
//!     .timeout_ms(50)
//!     .on_error(|e| e.kind())
//!     .run()
//!     .await;
//! assert!(matches!(result, Ok(5)));
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

mod error;
mod options;
mod race;
mod safe_await;
mod transform;

pub use error::*;
pub use options::*;
pub use safe_await::*;
pub use transform::*;

pub use safe_await_runtime as runtime;
