use super::*;

#[derive(Debug)]
pub(crate) enum Download {
  Comments(CommentSet),
  Empty,
}
