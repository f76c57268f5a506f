use std::time::Duration;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Settings of a [`SafeAwait`](crate::SafeAwait) call that do not depend on its types.
pub struct SafeAwaitOptions {
    timeout: Option<Duration>,
}

impl SafeAwaitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The deadline, if any. Never zero.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The operation must settle before `d` elapses. A zero duration unsets the deadline.
    pub fn set_timeout(&mut self, d: Duration) -> &mut Self {
        self.timeout = if d.is_zero() { None } else { Some(d) };
        self
    }

    pub fn set_timeout_ms(&mut self, ms: u64) -> &mut Self {
        self.set_timeout(Duration::from_millis(ms))
    }

    pub fn clear_timeout(&mut self) -> &mut Self {
        self.timeout = None;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_is_unset() {
        let mut options = SafeAwaitOptions::new();
        assert_eq!(options.timeout(), None);

        options.set_timeout_ms(50);
        assert_eq!(options.timeout(), Some(Duration::from_millis(50)));

        options.set_timeout(Duration::ZERO);
        assert_eq!(options.timeout(), None);

        options.set_timeout_ms(1).clear_timeout();
        assert_eq!(options, SafeAwaitOptions::default());
    }
}
