use super::*;

/// Walks a slot's comment feed backwards in time, one page per request.
pub(crate) struct Paginator<'a, S> {
  delay: Duration,
  source: &'a S,
}

impl<'a, S: CommentSource> Paginator<'a, S> {
  /// Fetches pages until the feed is exhausted, starting from `start`
  /// (epoch milliseconds) and sleeping `delay` after every page.
  pub(crate) async fn collect(
    &self,
    slot_id: &str,
    start: i64,
  ) -> Result<Download> {
    let mut set = CommentSet::default();

    let mut until = start;

    loop {
      debug!("{slot_id}: requesting comments until {until}");

      let page = self.source.fetch(slot_id, until).await.with_context(|| {
        format!("failed to fetch comments of {slot_id} until {until}")
      })?;

      let Some(next) = page.and_then(|page| set.absorb(page)) else {
        break;
      };

      until = next;

      info!("{slot_id}: {} comments", set.len());

      tokio::time::sleep(self.delay).await;
    }

    if set.is_empty() {
      info!("{slot_id}: no comments");
      return Ok(Download::Empty);
    }

    Ok(Download::Comments(set))
  }

  pub(crate) fn new(source: &'a S, delay: Duration) -> Self {
    Self { delay, source }
  }
}
