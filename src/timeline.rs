use super::*;

/// Oldest-first entries with vpos offsets, built from a newest-first set.
pub(crate) struct Timeline {
  entries: Vec<TimelineEntry>,
}

impl Timeline {
  pub(crate) fn entries(&self) -> &[TimelineEntry] {
    &self.entries
  }

  pub(crate) fn new(set: &CommentSet, origin: Origin) -> Self {
    let Some(zero) = set.origin(origin) else {
      return Self {
        entries: Vec::new(),
      };
    };

    Self {
      entries: set
        .comments()
        .iter()
        .rev()
        .map(|comment| TimelineEntry::new(comment, zero))
        .collect(),
    }
  }
}
