use super::*;

/// Downloads slots one after another and writes one XML file per slot.
pub(crate) struct Downloader<'a, S> {
  config: &'a Config,
  output: OutputDir,
  source: &'a S,
}

impl<'a, S: CommentSource> Downloader<'a, S> {
  /// Downloads a single slot. Returns the written path, or `None` when the
  /// slot has no comments, in which case nothing is written.
  pub(crate) async fn download(&self, slot_id: &str) -> Result<Option<PathBuf>> {
    let paginator = Paginator::new(self.source, self.config.page_delay);

    let Download::Comments(set) = paginator.collect(slot_id, now_millis()).await?
    else {
      return Ok(None);
    };

    let timeline = Timeline::new(&set, self.config.origin);

    let bytes = Packet::new(timeline.entries()).to_bytes();

    let path = self.output.write(slot_id, &bytes)?;

    info!(
      "{slot_id}: saved {} ({} comments)",
      path.display(),
      timeline.entries().len()
    );

    Ok(Some(path))
  }

  pub(crate) fn new(config: &'a Config, source: &'a S) -> Self {
    Self {
      config,
      output: OutputDir::new(&config.output_dir),
      source,
    }
  }

  /// Runs every slot in order. A failed slot is logged and skipped unless
  /// `fail_fast` is set; the batch fails if any slot did.
  pub(crate) async fn run(&self, slot_ids: &[String]) -> Result {
    let mut failed = Vec::new();

    for (i, slot_id) in slot_ids.iter().enumerate() {
      if i > 0 {
        tokio::time::sleep(self.config.slot_delay).await;
      }

      if let Err(error) = self.download(slot_id).await {
        if self.config.fail_fast {
          return Err(error);
        }

        error!("{slot_id}: {error:#}");

        failed.push(slot_id.as_str());
      }
    }

    if !failed.is_empty() {
      bail!(
        "{} of {} slots failed: {}",
        failed.len(),
        slot_ids.len(),
        failed.join(", ")
      );
    }

    Ok(())
  }
}
