use super::*;

/// Anything that can answer "up to one page of comments at or before
/// `until`", newest first. `None` signals the end of the feed.
pub(crate) trait CommentSource {
  async fn fetch(
    &self,
    slot_id: &str,
    until: i64,
  ) -> Result<Option<Vec<RawComment>>, FetchError>;
}
