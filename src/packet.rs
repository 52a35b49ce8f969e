use super::*;

/// The `<packet>` document read by comment-overlay players.
pub(crate) struct Packet<'a> {
  entries: &'a [TimelineEntry],
}

impl<'a> Packet<'a> {
  const DECLARATION: &'static str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

  fn chat_line(entry: &TimelineEntry) -> String {
    format!(
      r#"  <chat date="{}" user_id="{}" id="{}" vpos="{}" createdAtMs="{}">{}</chat>"#,
      entry.epoch_seconds,
      html_escape::encode_double_quoted_attribute(&entry.user_id),
      html_escape::encode_double_quoted_attribute(&entry.id),
      entry.offset_centiseconds,
      entry.created_at_ms,
      entry.text,
    )
  }

  pub(crate) fn new(entries: &'a [TimelineEntry]) -> Self {
    Self { entries }
  }

  /// Renders with `\n` line endings. `to_bytes` applies the output pass.
  pub(crate) fn render(&self) -> String {
    if self.entries.is_empty() {
      return format!("{}\n<packet/>", Self::DECLARATION);
    }

    let mut lines = Vec::with_capacity(self.entries.len() + 3);

    lines.push(Self::DECLARATION.to_string());
    lines.push("<packet>".to_string());
    lines.extend(self.entries.iter().map(Self::chat_line));
    lines.push("</packet>".to_string());

    lines.join("\n")
  }

  pub(crate) fn to_bytes(&self) -> Vec<u8> {
    finalize(&self.render()).into_bytes()
  }
}
