use super::*;

pub(crate) struct SlotList;

impl SlotList {
  const EXPECTED: &str =
    r#"slot list must be a JSON array of strings, e.g. ["slotId", "slotId"]"#;

  pub(crate) fn parse(text: &str) -> Result<Vec<String>> {
    serde_json::from_str::<Vec<String>>(text.trim()).context(Self::EXPECTED)
  }

  fn read_clipboard() -> Result<String> {
    Clipboard::new()
      .and_then(|mut clipboard| clipboard.get_text())
      .context("could not read slot list from clipboard")
  }

  /// Slot ids from the command line win; otherwise the JSON array is read
  /// from the clipboard, from `--slots` (`-` meaning stdin), or from stdin
  /// when nothing was given.
  pub(crate) fn resolve(arguments: &Arguments) -> Result<Vec<String>> {
    if !arguments.slot_ids.is_empty() {
      return Ok(arguments.slot_ids.clone());
    }

    let text = if arguments.clipboard {
      Self::read_clipboard()?
    } else {
      match arguments.slots.as_deref() {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
          .with_context(|| {
            format!("could not read slot list from {}", path.display())
          })?,
        _ => io::read_to_string(io::stdin())
          .context("could not read slot list from stdin")?,
      }
    };

    Self::parse(&text)
  }
}
