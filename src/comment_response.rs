use super::*;

/// Body of `GET /slots/{slot}/comments`. `comments` is `null` once the feed
/// is exhausted.
#[derive(Debug, Deserialize)]
pub(crate) struct CommentResponse {
  pub(crate) comments: Option<Vec<RawComment>>,
}
