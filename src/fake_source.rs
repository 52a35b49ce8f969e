use {
  super::*,
  std::{
    cmp::Reverse,
    collections::{HashMap, VecDeque},
    sync::Mutex,
  },
};

/// Replays canned responses in order, then reports end of feed.
pub(crate) struct Scripted {
  pages: Mutex<VecDeque<Option<Vec<RawComment>>>>,
  requests: Mutex<Vec<i64>>,
}

impl Scripted {
  pub(crate) fn new(pages: Vec<Option<Vec<RawComment>>>) -> Self {
    Self {
      pages: Mutex::new(pages.into()),
      requests: Mutex::new(Vec::new()),
    }
  }

  pub(crate) fn requests(&self) -> Vec<i64> {
    self.requests.lock().unwrap().clone()
  }
}

impl CommentSource for Scripted {
  async fn fetch(
    &self,
    _slot_id: &str,
    until: i64,
  ) -> Result<Option<Vec<RawComment>>, FetchError> {
    self.requests.lock().unwrap().push(until);
    Ok(self.pages.lock().unwrap().pop_front().flatten())
  }
}

/// Answers queries the way the upstream API does: up to `limit` comments at
/// or before `until`, newest first, `None` when there are none.
pub(crate) struct Feed {
  comments: Vec<RawComment>,
  limit: usize,
  requests: Mutex<usize>,
}

impl Feed {
  pub(crate) fn new(timestamps: &[i64], limit: usize) -> Self {
    let mut comments = timestamps
      .iter()
      .enumerate()
      .map(|(i, created_at_ms)| RawComment::at(&format!("c{i}"), *created_at_ms))
      .collect::<Vec<_>>();

    comments.sort_by_key(|comment| Reverse(comment.created_at_ms));

    Self {
      comments,
      limit,
      requests: Mutex::new(0),
    }
  }

  pub(crate) fn requests(&self) -> usize {
    *self.requests.lock().unwrap()
  }
}

impl CommentSource for Feed {
  async fn fetch(
    &self,
    _slot_id: &str,
    until: i64,
  ) -> Result<Option<Vec<RawComment>>, FetchError> {
    *self.requests.lock().unwrap() += 1;

    let page = self
      .comments
      .iter()
      .filter(|comment| comment.created_at_ms <= until)
      .take(self.limit)
      .cloned()
      .collect::<Vec<_>>();

    Ok((!page.is_empty()).then_some(page))
  }
}

pub(crate) struct Failing;

impl CommentSource for Failing {
  async fn fetch(
    &self,
    _slot_id: &str,
    _until: i64,
  ) -> Result<Option<Vec<RawComment>>, FetchError> {
    Err(FetchError::Status(StatusCode::FORBIDDEN))
  }
}

/// One feed per slot id; unknown slots answer 404.
pub(crate) struct Slots {
  feeds: HashMap<String, Feed>,
  requested: Mutex<Vec<String>>,
}

impl Slots {
  pub(crate) fn new(feeds: impl IntoIterator<Item = (&'static str, Feed)>) -> Self {
    Self {
      feeds: feeds
        .into_iter()
        .map(|(slot_id, feed)| (slot_id.to_string(), feed))
        .collect(),
      requested: Mutex::new(Vec::new()),
    }
  }

  /// Slot ids in the order they were first requested.
  pub(crate) fn requested(&self) -> Vec<String> {
    self.requested.lock().unwrap().clone()
  }
}

impl CommentSource for Slots {
  async fn fetch(
    &self,
    slot_id: &str,
    until: i64,
  ) -> Result<Option<Vec<RawComment>>, FetchError> {
    {
      let mut requested = self.requested.lock().unwrap();

      if requested.last().map(String::as_str) != Some(slot_id) {
        requested.push(slot_id.to_string());
      }
    }

    match self.feeds.get(slot_id) {
      Some(feed) => feed.fetch(slot_id, until).await,
      None => Err(FetchError::Status(StatusCode::NOT_FOUND)),
    }
  }
}
