use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{select, Either};
use futures_timer::Delay;

use crate::client::error::ApiError;

/// Resolves to `future`'s result, or to [`ApiError::Timeout`] if it takes longer than `timeout`.
///
/// The request future is dropped on timeout, which aborts the underlying fetch.
pub async fn with_timeout<T, F>(future: F, timeout: Duration) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let future = pin!(future);
    let delay = pin!(Delay::new(timeout));

    match select(future, delay).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    use super::*;

    #[test]
    fn test_completed_future_wins() {
        let result = block_on(with_timeout(ready(Ok(7)), Duration::from_secs(5)));

        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_errors_pass_through() {
        let result: Result<(), ApiError> = block_on(with_timeout(
            ready(Err(ApiError::Transport("offline".to_string()))),
            Duration::from_secs(5),
        ));

        assert_eq!(result, Err(ApiError::Transport("offline".to_string())));
    }

    #[test]
    fn test_pending_future_times_out() {
        let result: Result<(), ApiError> =
            block_on(with_timeout(pending(), Duration::from_millis(20)));

        assert_eq!(result, Err(ApiError::Timeout(Duration::from_millis(20))));
    }
}
