use {
  anyhow::{Context, bail},
  arboard::Clipboard,
  arguments::Arguments,
  clap::{Parser, ValueEnum},
  client::Client,
  comment_response::CommentResponse,
  comment_set::CommentSet,
  comment_source::CommentSource,
  config::Config,
  crossterm::style::Stylize,
  download::Download,
  downloader::Downloader,
  fetch_error::FetchError,
  jiff::Timestamp,
  log::{debug, error, info, warn},
  origin::Origin,
  output_dir::OutputDir,
  packet::Packet,
  paginator::Paginator,
  raw_comment::RawComment,
  reqwest::StatusCode,
  retry_policy::RetryPolicy,
  serde::Deserialize,
  slot_list::SlotList,
  std::{
    backtrace::BacktraceStatus,
    collections::HashSet,
    fs,
    io::{self, IsTerminal},
    path::{Path, PathBuf},
    process,
    time::Duration,
  },
  thiserror::Error,
  timeline::Timeline,
  timeline_entry::TimelineEntry,
  utils::{escape_xml, finalize, now_millis},
};

mod arguments;
mod client;
mod comment_response;
mod comment_set;
mod comment_source;
mod config;
mod download;
mod downloader;
#[cfg(test)]
mod fake_source;
mod fetch_error;
mod origin;
mod output_dir;
mod packet;
mod paginator;
mod raw_comment;
mod retry_policy;
mod slot_list;
mod timeline;
mod timeline_entry;
mod utils;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_logging() {
  env_logger::Builder::from_env(
    env_logger::Env::default().default_filter_or("info"),
  )
  .init();
}

async fn run() -> Result {
  dotenvy::dotenv().ok();

  initialize_logging();

  let arguments = Arguments::parse();

  let slot_ids = SlotList::resolve(&arguments)?;

  let config = Config::from(&arguments);

  let client = Client::new(&config);

  Downloader::new(&config, &client).run(&slot_ids).await
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
