use super::*;

/// Escapes `&`, `<`, `>`, `"`, `'` and NUL in message text. Runs in a
/// single pass, so entities it produces are never escaped again.
pub(crate) fn escape_xml(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());

  for ch in text.chars() {
    match ch {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      '\0' => escaped.push_str("&#x0;"),
      _ => escaped.push(ch),
    }
  }

  escaped
}

/// Output pass expected by comment-overlay players: no `standalone`
/// declaration, exact duplicate wrapper lines removed (first occurrence
/// kept), lines joined with CRLF.
///
/// Lines belonging to a `<chat>` element are message content and are never
/// dropped, even when a multi-line message repeats an earlier line.
pub(crate) fn finalize(document: &str) -> String {
  let mut seen = HashSet::new();
  let mut inside_chat = false;

  document
    .replace(" standalone=\"yes\"", "")
    .split('\n')
    .filter(|line| {
      let chat = inside_chat || line.trim_start().starts_with("<chat ");

      inside_chat = chat && !line.ends_with("</chat>");

      chat || seen.insert(line.to_string())
    })
    .collect::<Vec<_>>()
    .join("\r\n")
}

pub(crate) fn now_millis() -> i64 {
  Timestamp::now().as_millisecond()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escape_xml_replaces_all_special_characters() {
    assert_eq!(
      escape_xml("a & b < c > d \" e ' f \0 g"),
      "a &amp; b &lt; c &gt; d &quot; e &#39; f &#x0; g"
    );
  }

  #[test]
  fn escape_xml_leaves_plain_text_alone() {
    assert_eq!(escape_xml("わこつ www"), "わこつ www");
  }

  #[test]
  fn escape_xml_escapes_ampersand_once() {
    assert_eq!(escape_xml("<&>"), "&lt;&amp;&gt;");
    assert_eq!(escape_xml("&amp;"), "&amp;amp;");
  }

  #[test]
  fn finalize_strips_standalone_declaration() {
    assert_eq!(
      finalize("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n<packet/>"),
      "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n<packet/>"
    );
  }

  #[test]
  fn finalize_drops_repeated_lines_keeping_first() {
    assert_eq!(finalize("a\nb\na\nc\nb"), "a\r\nb\r\nc");
  }

  #[test]
  fn finalize_keeps_repeated_lines_inside_chats() {
    let document = [
      "<packet>",
      "  <chat id=\"a\">first",
      "same</chat>",
      "  <chat id=\"b\">second",
      "same</chat>",
      "</packet>",
    ]
    .join("\n");

    let output = finalize(&document);

    assert_eq!(output, document.replace('\n', "\r\n"));
    assert_eq!(output.matches("</chat>").count(), 2);
  }

  #[test]
  fn finalize_drops_repeated_wrapper_lines_around_chats() {
    assert_eq!(
      finalize("<packet>\n  <chat id=\"a\">x</chat>\n<packet>\n</packet>"),
      "<packet>\r\n  <chat id=\"a\">x</chat>\r\n</packet>"
    );
  }

  #[test]
  fn finalize_keeps_carriage_returns_inside_messages() {
    assert_eq!(
      finalize("  <chat id=\"a\">x\ry</chat>\n</packet>"),
      "  <chat id=\"a\">x\ry</chat>\r\n</packet>"
    );
  }
}
