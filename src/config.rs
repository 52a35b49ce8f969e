use super::*;

/// Everything a download needs, resolved once from the command line.
#[derive(Clone, Debug)]
pub(crate) struct Config {
  pub(crate) api_url: String,
  pub(crate) fail_fast: bool,
  pub(crate) origin: Origin,
  pub(crate) output_dir: PathBuf,
  pub(crate) page_delay: Duration,
  pub(crate) retry: RetryPolicy,
  pub(crate) slot_delay: Duration,
  pub(crate) token: String,
}

impl From<&Arguments> for Config {
  fn from(arguments: &Arguments) -> Self {
    Self {
      api_url: arguments.api_url.clone(),
      fail_fast: arguments.fail_fast,
      origin: arguments.origin,
      output_dir: arguments.output_dir.clone(),
      page_delay: Duration::from_millis(arguments.page_delay),
      retry: RetryPolicy {
        backoff: Duration::from_millis(arguments.retry_backoff),
        max_attempts: arguments.max_attempts,
      },
      slot_delay: Duration::from_millis(arguments.slot_delay),
      token: arguments.token.clone(),
    }
  }
}
