//! ### `safe-await-runtime`: Async runtime abstraction
//!
//! The two runtime services `safe-await` needs: a deadline timer and a way to let an abandoned
//! operation finish in the background. Exactly one of `runtime-tokio` or `runtime-async-std`
//! must be enabled.

#[cfg(all(feature = "runtime-async-std", feature = "runtime-tokio"))]
compile_error!("'runtime-async-std' and 'runtime-tokio' cannot be enabled at the same time");

#[cfg(not(any(feature = "runtime-async-std", feature = "runtime-tokio")))]
compile_error!("Please enable a runtime: 'runtime-tokio' or 'runtime-async-std'");

mod detach;
mod sleep;

pub use detach::*;
pub use sleep::*;
