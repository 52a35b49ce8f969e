use super::*;

/// Comments collected for one slot, newest first, each id at most once.
#[derive(Debug, Default)]
pub(crate) struct CommentSet {
  comments: Vec<RawComment>,
  ids: HashSet<String>,
  single_page_origin: Option<i64>,
}

impl CommentSet {
  /// Appends the unseen comments of `page` and returns the `until` bound for
  /// the next request, or `None` for an empty page.
  ///
  /// A page holding a single comment, or holding nothing new, would be
  /// returned again by an inclusive bound, so the bound steps one
  /// millisecond past its oldest comment.
  pub(crate) fn absorb(&mut self, page: Vec<RawComment>) -> Option<i64> {
    let oldest = page.iter().map(|comment| comment.created_at_ms).min()?;

    let single = page.len() == 1;

    if single {
      self.single_page_origin = Some(oldest);
    }

    let before = self.comments.len();

    for comment in page {
      if self.ids.insert(comment.id.clone()) {
        self.comments.push(comment);
      }
    }

    let stalled = self.comments.len() == before;

    Some(if single || stalled { oldest - 1 } else { oldest })
  }

  pub(crate) fn comments(&self) -> &[RawComment] {
    &self.comments
  }

  fn earliest(&self) -> Option<i64> {
    self
      .comments
      .iter()
      .map(|comment| comment.created_at_ms)
      .min()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.comments.is_empty()
  }

  pub(crate) fn len(&self) -> usize {
    self.comments.len()
  }

  /// Timestamp used as vpos zero, `None` only for an empty set.
  pub(crate) fn origin(&self, origin: Origin) -> Option<i64> {
    match origin {
      Origin::Earliest => self.earliest(),
      Origin::SinglePage => self.single_page_origin.or_else(|| {
        warn!("no single-comment page seen, using the oldest comment as origin");
        self.earliest()
      }),
    }
  }
}
