use super::*;

/// Which comment counts as vpos zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub(crate) enum Origin {
  /// The oldest collected comment.
  #[default]
  Earliest,
  /// The comment of the most recent single-comment page, as older tools
  /// did. Falls back to the oldest comment when no such page was seen.
  SinglePage,
}
