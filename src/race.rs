use futures::future::{select, Either, Future};
use futures::pin_mut;

/// Outcome of racing an operation against a deadline.
pub(crate) enum Race<T, D, F> {
    /// The operation settled first. The deadline has already been dropped.
    Settled(T),
    /// The deadline fired first; the operation is handed back unfinished.
    Elapsed(D, F),
}

/// First-settle-wins race between `operation` and `deadline`.
///
/// The operation is polled first, so one that is already settled always wins. The deadline
/// future lives in this frame and is released before the outcome reaches the caller.
pub(crate) async fn race<F, D>(operation: F, deadline: Option<D>) -> Race<F::Output, D::Output, F>
where
    F: Future + Unpin,
    D: Future,
{
    let deadline = match deadline {
        Some(deadline) => deadline,
        None => return Race::Settled(operation.await),
    };
    pin_mut!(deadline);
    match select(operation, deadline).await {
        Either::Left((output, _)) => Race::Settled(output),
        Either::Right((elapsed, operation)) => Race::Elapsed(elapsed, operation),
    }
}
