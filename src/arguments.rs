use super::*;

#[derive(Debug, Parser)]
#[command(
  name = "slotlog",
  version,
  about = "Download the full comment history of live-stream slots as overlay XML"
)]
pub(crate) struct Arguments {
  /// Base URL of the comment API
  #[arg(long, env = "ABEMA_API_URL", default_value = "https://api.abema.io/v1")]
  pub(crate) api_url: String,

  /// Read the JSON array of slot ids from the clipboard
  #[arg(long, conflicts_with_all = ["slot_ids", "slots"])]
  pub(crate) clipboard: bool,

  /// Abort the batch on the first failed slot
  #[arg(long)]
  pub(crate) fail_fast: bool,

  /// Attempts per request while the API answers 502
  #[arg(long, default_value_t = 10)]
  pub(crate) max_attempts: u32,

  /// Which comment counts as vpos zero
  #[arg(long, value_enum, default_value_t = Origin::Earliest)]
  pub(crate) origin: Origin,

  /// Directory the `<slot>.xml` files are written to
  #[arg(long, default_value = "dist")]
  pub(crate) output_dir: PathBuf,

  /// Milliseconds to wait after every page
  #[arg(long, default_value_t = 1000)]
  pub(crate) page_delay: u64,

  /// Milliseconds to wait before retry `n`, multiplied by `n`
  #[arg(long, default_value_t = 1000)]
  pub(crate) retry_backoff: u64,

  /// Milliseconds to wait between slots
  #[arg(long, default_value_t = 1)]
  pub(crate) slot_delay: u64,

  /// Slot ids to download
  #[arg(value_name = "SLOT_ID")]
  pub(crate) slot_ids: Vec<String>,

  /// File holding a JSON array of slot ids, `-` for stdin
  #[arg(long, value_name = "FILE", conflicts_with = "slot_ids")]
  pub(crate) slots: Option<PathBuf>,

  /// Bearer token for the comment API
  #[arg(long, env = "ABEMA_TOKEN", hide_env_values = true)]
  pub(crate) token: String,
}
