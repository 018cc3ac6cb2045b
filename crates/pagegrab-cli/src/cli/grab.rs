//! The grab run: build the downloader, print progress, print the summary.

use anyhow::{Context, Result};
use pagegrab_core::{FileDownloader, GrabConfig, GrabEvent};

/// Runs the page run over `pages` and prints the summary line.
/// Returns the number of files downloaded. Failed pages or files are
/// reported on stderr, never returned as errors; only an unparsable
/// configured base URL is.
pub fn run_grab(cfg: &GrabConfig, pages: &[String]) -> Result<usize> {
    let downloader = FileDownloader::from_config(cfg).context("cannot set up downloader")?;
    tracing::info!(
        pages = pages.len(),
        extension = %cfg.extension,
        dir = %cfg.download_dir.display(),
        "starting grab"
    );

    let count = downloader.download_files_from_pages_with(
        pages,
        &cfg.extension,
        &cfg.download_dir,
        print_event,
    );
    println!("{}", summary_line(count));
    Ok(count)
}

fn print_event(event: GrabEvent<'_>) {
    if event.is_failure() {
        eprintln!("{}", event);
    } else {
        println!("{}", event);
    }
}

pub fn summary_line(count: usize) -> String {
    if count > 0 {
        format!("Successfully downloaded {} files.", count)
    } else {
        "No files were downloaded.".to_string()
    }
}
