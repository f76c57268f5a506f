use futures::future::{Future, TryFuture, TryFutureExt};
use futures::pin_mut;
use safe_await_runtime::{detach, sleep};
use std::{fmt, time::Duration};

use crate::{
    race::{race, Race},
    ErrorTransform, Identity, MapErr, MapOk, MapOkAsync, SafeAwaitOptions, SafeErr, SafeResult,
    SuccessTransform, TimeoutError, TryMapOk,
};

/// Awaits a fallible future into a [`SafeResult`], applying optional transforms and a deadline.
///
/// ```
/// # async fn example() {
/// use safe_await::{SafeAwait, SafeErr};
///
/// let result = SafeAwait::new(async { Ok::<_, std::io::Error>(5) })
///     .on_success(|n| format!("Number is {n}"))
///     .timeout_ms(50)
///     .run()
///     .await;
/// assert_eq!(result.ok().as_deref(), Some("Number is 5"));
/// # }
/// ```
///
/// The deadline covers the operation only. Once the operation settles the timer is released,
/// and the success transform runs without a deadline. A timeout is returned as
/// [`SafeErr::Timeout`] and never reaches `on_error`; any other failure, including one raised
/// by [`try_on_success`](Self::try_on_success), is passed through `on_error`.
pub struct SafeAwait<Fut, S = Identity, R = Identity> {
    operation: Fut,
    on_success: S,
    on_error: R,
    options: SafeAwaitOptions,
}

impl<Fut> SafeAwait<Fut> {
    pub fn new(operation: Fut) -> Self {
        Self {
            operation,
            on_success: Identity,
            on_error: Identity,
            options: SafeAwaitOptions::default(),
        }
    }
}

impl<Fut, S, R> SafeAwait<Fut, S, R> {
    /// Transform the success value synchronously.
    pub fn on_success<F, M>(self, f: F) -> SafeAwait<Fut, MapOk<F>, R>
    where
        Fut: TryFuture,
        F: FnOnce(Fut::Ok) -> M,
    {
        self.with_success(MapOk(f))
    }

    /// Transform the success value asynchronously.
    pub fn on_success_async<F, AFut>(self, f: F) -> SafeAwait<Fut, MapOkAsync<F>, R>
    where
        Fut: TryFuture,
        F: FnOnce(Fut::Ok) -> AFut,
        AFut: Future,
    {
        self.with_success(MapOkAsync(f))
    }

    /// Transform the success value asynchronously, with the chance to fail.
    /// An `Err` is handled like an error of the operation itself.
    pub fn try_on_success<F, AFut, M>(self, f: F) -> SafeAwait<Fut, TryMapOk<F>, R>
    where
        Fut: TryFuture,
        F: FnOnce(Fut::Ok) -> AFut,
        AFut: Future<Output = Result<M, Fut::Error>>,
    {
        self.with_success(TryMapOk(f))
    }

    /// Transform the error of a failed operation. Not invoked on timeout.
    pub fn on_error<F, N>(self, f: F) -> SafeAwait<Fut, S, MapErr<F>>
    where
        Fut: TryFuture,
        F: FnOnce(Fut::Error) -> N,
    {
        SafeAwait {
            operation: self.operation,
            on_success: self.on_success,
            on_error: MapErr(f),
            options: self.options,
        }
    }

    pub fn options(mut self, options: SafeAwaitOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the deadline. A zero duration means no deadline.
    pub fn timeout(mut self, d: Duration) -> Self {
        self.options.set_timeout(d);
        self
    }

    pub fn timeout_ms(mut self, ms: u64) -> Self {
        self.options.set_timeout_ms(ms);
        self
    }

    fn with_success<S2>(self, on_success: S2) -> SafeAwait<Fut, S2, R> {
        SafeAwait {
            operation: self.operation,
            on_success,
            on_error: self.on_error,
            options: self.options,
        }
    }
}

impl<Fut, S, R> SafeAwait<Fut, S, R>
where
    Fut: TryFuture,
    S: SuccessTransform<Fut::Ok, Fut::Error>,
    R: ErrorTransform<Fut::Error>,
{
    /// Drive the operation to an outcome.
    ///
    /// If the deadline fires first the operation is dropped, which cancels it at its current
    /// await point. Use [`run_detached`](Self::run_detached) to let it finish unobserved instead.
    ///
    /// # Panics
    ///
    /// With a timeout set under `runtime-tokio`, panics when the operation does not settle on
    /// its first poll and the call is not driven by a tokio runtime. Without a timeout, or under
    /// `runtime-async-std`, any executor works.
    pub async fn run(self) -> SafeResult<S::Value, R::Error> {
        let Self {
            operation,
            on_success,
            on_error,
            options,
        } = self;
        let operation = TryFutureExt::into_future(operation);
        pin_mut!(operation);

        match race(operation, deadline(&options)).await {
            Race::Settled(output) => settle(output, on_success, on_error).await,
            Race::Elapsed(err, _) => {
                log::debug!("{err}; operation dropped");
                Err(SafeErr::Timeout(err))
            }
        }
    }

    /// Like [`run`](Self::run), but an operation that misses its deadline is spawned onto the
    /// runtime and left to finish on its own. Its eventual output is discarded.
    ///
    /// # Panics
    ///
    /// Same runtime requirement as [`run`](Self::run).
    pub async fn run_detached(self) -> SafeResult<S::Value, R::Error>
    where
        Fut: Send + 'static,
        Fut::Ok: Send + 'static,
        Fut::Error: Send + 'static,
    {
        let Self {
            operation,
            on_success,
            on_error,
            options,
        } = self;
        let operation = Box::pin(TryFutureExt::into_future(operation));

        match race(operation, deadline(&options)).await {
            Race::Settled(output) => settle(output, on_success, on_error).await,
            Race::Elapsed(err, operation) => {
                log::debug!("{err}; operation detached");
                detach(async move {
                    let failed = operation.await.is_err();
                    log::trace!("Detached operation settled (failed: {failed})");
                });
                Err(SafeErr::Timeout(err))
            }
        }
    }
}

impl<Fut, S, R> fmt::Debug for SafeAwait<Fut, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeAwait")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// A timer that resolves to the error it stands for, created only when a timeout is set.
fn deadline(options: &SafeAwaitOptions) -> Option<impl Future<Output = TimeoutError>> {
    options.timeout().map(|d| {
        log::trace!("Deadline armed: {}ms", d.as_millis());
        async move {
            sleep(d).await;
            TimeoutError::new(d)
        }
    })
}

async fn settle<T, E, S, R>(
    output: Result<T, E>,
    on_success: S,
    on_error: R,
) -> SafeResult<S::Value, R::Error>
where
    S: SuccessTransform<T, E>,
    R: ErrorTransform<E>,
{
    let output = match output {
        Ok(value) => on_success.transform(value).await,
        Err(err) => Err(err),
    };
    output.map_err(|err| SafeErr::Failed(on_error.transform(err)))
}

/// Awaits `operation` into a [`SafeResult`] without transforms or deadline. Works under any executor.
pub async fn safe_await<Fut>(operation: Fut) -> SafeResult<Fut::Ok, Fut::Error>
where
    Fut: TryFuture,
{
    SafeAwait::new(operation).run().await
}

/// Awaits `operation` into a [`SafeResult`] under the given options.
///
/// # Panics
///
/// Same runtime requirement as [`SafeAwait::run`].
pub async fn safe_await_with<Fut>(
    operation: Fut,
    options: SafeAwaitOptions,
) -> SafeResult<Fut::Ok, Fut::Error>
where
    Fut: TryFuture,
{
    SafeAwait::new(operation).options(options).run().await
}

/// Adds [`safe`](SafeAwaitExt::safe) to every fallible future.
pub trait SafeAwaitExt: TryFuture + Sized {
    /// Start a [`SafeAwait`] builder around this future.
    fn safe(self) -> SafeAwait<Self> {
        SafeAwait::new(self)
    }
}

impl<F: TryFuture> SafeAwaitExt for F {}
