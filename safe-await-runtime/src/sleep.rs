use std::time::Duration;

/// Completes once `d` has elapsed. Dropping it earlier deregisters the timer.
///
/// # Panics
///
/// With `runtime-tokio`, panics if first polled outside a tokio runtime. Creating the future is
/// always fine; the timer is only registered on the first poll.
#[cfg(feature = "runtime-tokio")]
pub async fn sleep(d: Duration) {
    tokio::time::sleep(d).await
}

/// Completes once `d` has elapsed. Dropping it earlier deregisters the timer.
///
/// Works under any executor; async-std drives its timers from its own reactor thread.
#[cfg(feature = "runtime-async-std")]
pub async fn sleep(d: Duration) {
    async_std::task::sleep(d).await
}
