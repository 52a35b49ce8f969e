use super::*;

#[derive(Clone, Copy, Debug)]
pub(crate) struct RetryPolicy {
  pub(crate) backoff: Duration,
  pub(crate) max_attempts: u32,
}

impl RetryPolicy {
  /// Runs `attempt` until it succeeds, fails with a non-transient error, or
  /// `max_attempts` is reached. The wait before retry `n` is `backoff * n`.
  pub(crate) async fn run<T, F, Fut>(&self, mut attempt: F) -> Result<T, FetchError>
  where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
  {
    let max_attempts = self.max_attempts.max(1);

    for n in 1..=max_attempts {
      match attempt().await {
        Err(error) if error.is_transient() => {
          if n == max_attempts {
            break;
          }

          warn!("{error}, retrying ({n}/{max_attempts})");

          tokio::time::sleep(self.backoff * n).await;
        }
        result => return result,
      }
    }

    Err(FetchError::Exhausted {
      attempts: max_attempts,
    })
  }
}
