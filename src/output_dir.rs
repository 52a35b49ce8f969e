use super::*;

pub(crate) struct OutputDir {
  path: PathBuf,
}

impl OutputDir {
  pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// Writes `{slot_id}.xml`, creating the directory first if needed.
  pub(crate) fn write(&self, slot_id: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(&self.path).with_context(|| {
      format!("could not create output directory {}", self.path.display())
    })?;

    let path = self.path.join(format!("{slot_id}.xml"));

    fs::write(&path, bytes)
      .with_context(|| format!("could not write {}", path.display()))?;

    Ok(path)
  }
}
