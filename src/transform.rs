//! Success and error transforms applied after the operation settles.
//!
//! [`SafeAwait`](crate::SafeAwait) stores its transforms as type parameters, so an absent
//! transform costs nothing. The builder methods wrap user closures in the adapters below.

use futures::future::{ready, Future, FutureExt, Ready};

/// Reshapes the value of a successful operation, possibly asynchronously and possibly failing.
///
/// A failure re-enters the error path and is offered to the [`ErrorTransform`].
pub trait SuccessTransform<T, E> {
    type Value;
    type Future: Future<Output = Result<Self::Value, E>>;

    fn transform(self, value: T) -> Self::Future;
}

/// Reshapes the error of a failed operation.
pub trait ErrorTransform<E> {
    type Error;

    fn transform(self, error: E) -> Self::Error;
}

#[derive(Debug, Default, Clone, Copy)]
/// Passes values and errors through unchanged.
pub struct Identity;

#[derive(Debug, Clone, Copy)]
/// A synchronous success transform, see [`SafeAwait::on_success`](crate::SafeAwait::on_success).
pub struct MapOk<F>(pub(crate) F);

#[derive(Debug, Clone, Copy)]
/// An asynchronous success transform, see [`SafeAwait::on_success_async`](crate::SafeAwait::on_success_async).
pub struct MapOkAsync<F>(pub(crate) F);

#[derive(Debug, Clone, Copy)]
/// A fallible asynchronous success transform, see [`SafeAwait::try_on_success`](crate::SafeAwait::try_on_success).
pub struct TryMapOk<F>(pub(crate) F);

#[derive(Debug, Clone, Copy)]
/// An error transform, see [`SafeAwait::on_error`](crate::SafeAwait::on_error).
pub struct MapErr<F>(pub(crate) F);

impl<T, E> SuccessTransform<T, E> for Identity {
    type Value = T;
    type Future = Ready<Result<T, E>>;

    fn transform(self, value: T) -> Self::Future {
        ready(Ok(value))
    }
}

impl<E> ErrorTransform<E> for Identity {
    type Error = E;

    fn transform(self, error: E) -> E {
        error
    }
}

impl<T, E, M, F> SuccessTransform<T, E> for MapOk<F>
where
    F: FnOnce(T) -> M,
{
    type Value = M;
    type Future = Ready<Result<M, E>>;

    fn transform(self, value: T) -> Self::Future {
        ready(Ok((self.0)(value)))
    }
}

impl<T, E, Fut, F> SuccessTransform<T, E> for MapOkAsync<F>
where
    F: FnOnce(T) -> Fut,
    Fut: Future,
{
    type Value = Fut::Output;
    type Future = futures::future::Map<Fut, fn(Fut::Output) -> Result<Fut::Output, E>>;

    fn transform(self, value: T) -> Self::Future {
        (self.0)(value)
            .map(Result::Ok as fn(Fut::Output) -> Result<Fut::Output, E>)
    }
}

impl<T, E, M, Fut, F> SuccessTransform<T, E> for TryMapOk<F>
where
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = Result<M, E>>,
{
    type Value = M;
    type Future = Fut;

    fn transform(self, value: T) -> Fut {
        (self.0)(value)
    }
}

impl<E, N, F> ErrorTransform<E> for MapErr<F>
where
    F: FnOnce(E) -> N,
{
    type Error = N;

    fn transform(self, error: E) -> N {
        (self.0)(error)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn adapters() {
        let id = SuccessTransform::<u8, ()>::transform(Identity, 7);
        assert_eq!(block_on(id), Ok(7));
        assert_eq!(ErrorTransform::transform(Identity, "e"), "e");

        let map = SuccessTransform::<u8, ()>::transform(MapOk(|n: u8| n * 2), 7);
        assert_eq!(block_on(map), Ok(14));

        let map = SuccessTransform::<u8, ()>::transform(
            MapOkAsync(|n: u8| async move { format!("{n}!") }),
            7,
        );
        assert_eq!(block_on(map), Ok("7!".to_owned()));

        let map = TryMapOk(|n: u8| async move { n.checked_sub(8).ok_or("underflow") });
        assert_eq!(block_on(map.transform(7)), Err("underflow"));

        assert_eq!(MapErr(|e: &str| e.len()).transform("four"), 4);
    }
}
