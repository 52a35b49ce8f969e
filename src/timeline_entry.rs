use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct TimelineEntry {
  pub(crate) created_at_ms: i64,
  pub(crate) epoch_seconds: i64,
  pub(crate) id: String,
  pub(crate) offset_centiseconds: i64,
  pub(crate) text: String,
  pub(crate) user_id: String,
}

impl TimelineEntry {
  pub(crate) fn new(comment: &RawComment, origin: i64) -> Self {
    Self {
      created_at_ms: comment.created_at_ms,
      epoch_seconds: comment.created_at_ms.div_euclid(1000),
      id: comment.id.clone(),
      offset_centiseconds: (comment.created_at_ms - origin).div_euclid(10),
      text: escape_xml(&comment.message),
      user_id: comment.user_id.clone(),
    }
  }
}
