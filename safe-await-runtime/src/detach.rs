use std::future::Future;

/// Lets `future` run to completion in the background. Nobody observes its end.
///
/// # Panics
///
/// With `runtime-tokio`, panics when called outside a tokio runtime.
pub fn detach<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    // dropping the join handle detaches the task on both runtimes
    #[cfg(feature = "runtime-tokio")]
    drop(tokio::task::spawn(future));

    #[cfg(feature = "runtime-async-std")]
    drop(async_std::task::spawn(future));
}
