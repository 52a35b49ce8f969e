use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
  retry: RetryPolicy,
  token: String,
}

impl Client {
  const PAGE_LIMIT: usize = 1000;

  async fn fetch_once(
    &self,
    slot_id: &str,
    until: i64,
  ) -> Result<Option<Vec<RawComment>>, FetchError> {
    let response = self
      .client
      .get(format!("{}/slots/{slot_id}/comments", self.base_url))
      .query(&[
        ("limit", Self::PAGE_LIMIT.to_string()),
        ("until", until.to_string()),
      ])
      .bearer_auth(&self.token)
      .send()
      .await?;

    FetchError::check(response.status())?;

    Ok(response.json::<CommentResponse>().await?.comments)
  }

  pub(crate) fn new(config: &Config) -> Self {
    Self {
      base_url: config.api_url.trim_end_matches('/').to_string(),
      client: reqwest::Client::new(),
      retry: config.retry,
      token: config.token.clone(),
    }
  }
}

impl CommentSource for Client {
  async fn fetch(
    &self,
    slot_id: &str,
    until: i64,
  ) -> Result<Option<Vec<RawComment>>, FetchError> {
    self.retry.run(move || self.fetch_once(slot_id, until)).await
  }
}
