use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use futures::future::{AbortHandle, Abortable};

pub use futures::future::Aborted;

/// Keeps only the most recently started request alive.
///
/// Starting a request aborts the one before it, and [`LatestRequest::abort`]
/// cancels whatever is still in flight (used on component cleanup). An aborted
/// request resolves to `Err(Aborted)` and its inner future is dropped, which
/// also cancels the underlying browser fetch.
#[derive(Clone, Default)]
pub struct LatestRequest {
    in_flight: Arc<Mutex<Option<AbortHandle>>>,
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<F: Future>(&self, request: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        let previous = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }

        Abortable::new(request, registration)
    }

    pub fn abort(&self) {
        let in_flight = self
            .in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = in_flight {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    use super::*;

    #[test]
    fn newer_request_aborts_older() {
        let latest = LatestRequest::new();

        let first = latest.start(ready(1));
        let second = latest.start(ready(2));

        assert_eq!(block_on(second), Ok(2));
        assert_eq!(block_on(first), Err(Aborted));
    }

    #[test]
    fn abort_cancels_in_flight_request() {
        let latest = LatestRequest::new();

        let request = latest.start(pending::<()>());
        latest.abort();

        assert_eq!(block_on(request), Err(Aborted));
    }

    #[test]
    fn abort_without_request_is_noop() {
        let latest = LatestRequest::new();
        latest.abort();

        assert_eq!(block_on(latest.start(ready("ok"))), Ok("ok"));
    }
}
