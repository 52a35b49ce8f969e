use super::*;

#[derive(Debug, Error)]
pub(crate) enum FetchError {
  #[error("upstream answered 502 bad gateway")]
  BadGateway,
  #[error("upstream kept failing, gave up after {attempts} attempts")]
  Exhausted { attempts: u32 },
  #[error("upstream answered {0}")]
  Status(StatusCode),
  #[error(transparent)]
  Transport(#[from] reqwest::Error),
}

impl FetchError {
  /// 502 is transient, any other non-2xx status is fatal.
  pub(crate) fn check(status: StatusCode) -> Result<(), Self> {
    match status {
      StatusCode::BAD_GATEWAY => Err(Self::BadGateway),
      status if !status.is_success() => Err(Self::Status(status)),
      _ => Ok(()),
    }
  }

  pub(crate) fn is_transient(&self) -> bool {
    matches!(self, Self::BadGateway)
  }
}
