use std::{fmt, time::Duration};
use thiserror::Error;

/// Type alias of the [`Result`] type returned by [`SafeAwait`](crate::SafeAwait).
pub type SafeResult<T, E> = std::result::Result<T, SafeErr<E>>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// The failure side of a [`SafeResult`].
pub enum SafeErr<E> {
    /// The deadline fired before the operation settled. Never passed through `on_error`.
    #[error(transparent)]
    Timeout(#[from] TimeoutError),
    /// The operation, or its success transform, failed. Holds the (possibly transformed) error.
    #[error("Operation failed: {0}")]
    Failed(E),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
/// The operation did not settle within the configured deadline.
pub struct TimeoutError {
    duration: Duration,
}

impl TimeoutError {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// The deadline that was exceeded.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The deadline in whole milliseconds, rounded up so a sub-millisecond timer never reads as 0ms.
    pub fn millis(&self) -> u128 {
        (self.duration.as_nanos() + 999_999) / 1_000_000
    }
}

impl fmt::Display for TimeoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operation timed out after {}ms", self.millis())
    }
}

impl<E> SafeErr<E> {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    pub fn timeout(&self) -> Option<&TimeoutError> {
        match self {
            Self::Timeout(e) => Some(e),
            Self::Failed(_) => None,
        }
    }

    pub fn failed(&self) -> Option<&E> {
        match self {
            Self::Timeout(_) => None,
            Self::Failed(e) => Some(e),
        }
    }

    pub fn into_failed(self) -> Option<E> {
        match self {
            Self::Timeout(_) => None,
            Self::Failed(e) => Some(e),
        }
    }

    /// Maps the `Failed` payload, leaving a timeout untouched.
    pub fn map_failed<F, N>(self, f: F) -> SafeErr<N>
    where
        F: FnOnce(E) -> N,
    {
        match self {
            Self::Timeout(e) => SafeErr::Timeout(e),
            Self::Failed(e) => SafeErr::Failed(f(e)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timeout_message() {
        let err = TimeoutError::new(Duration::from_millis(50));
        assert_eq!(err.to_string(), "Operation timed out after 50ms");
        assert_eq!(err.duration(), Duration::from_millis(50));

        let err: SafeErr<std::io::Error> = err.into();
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Operation timed out after 50ms");
        assert!(err.failed().is_none());
    }

    #[test]
    fn timeout_message_rounds_up() {
        let message = |d| TimeoutError::new(d).to_string();
        assert_eq!(message(Duration::from_micros(1500)), "Operation timed out after 2ms");
        assert_eq!(message(Duration::from_micros(300)), "Operation timed out after 1ms");
        assert_eq!(message(Duration::from_millis(1)), "Operation timed out after 1ms");
        assert_eq!(message(Duration::from_secs(2)), "Operation timed out after 2000ms");
    }

    #[test]
    fn timeout_is_reported_once_in_chain() {
        use std::error::Error as _;

        let err: SafeErr<std::io::Error> = TimeoutError::new(Duration::from_millis(50)).into();
        assert!(err.source().is_none());

        let chain = format!("{:#}", anyhow::Error::new(err));
        assert_eq!(chain, "Operation timed out after 50ms");
    }

    #[test]
    fn map_failed() {
        let err: SafeErr<u32> = SafeErr::Failed(404);
        assert_eq!(err.failed(), Some(&404));
        assert_eq!(err.clone().map_failed(|c| c + 1), SafeErr::Failed(405));
        assert_eq!(err.into_failed(), Some(404));

        let err: SafeErr<u32> = SafeErr::Timeout(TimeoutError::new(Duration::from_secs(1)));
        assert_eq!(
            err.map_failed(|c| c.to_string()),
            SafeErr::Timeout(TimeoutError::new(Duration::from_millis(1000)))
        );
    }
}
