//! The page run: fetch → extract → download each → count.

use crate::error::GrabError;
use crate::links;
use crate::transport::Transport;
use std::error::Error as _;
use std::fmt;
use std::path::Path;

use super::FileDownloader;

/// Something worth telling the user about during a page run.
#[derive(Debug)]
pub enum GrabEvent<'a> {
    /// The page URL was invalid or the page could not be fetched; nothing
    /// was downloaded from it.
    PageFailed {
        page_url: &'a str,
        error: &'a GrabError,
    },
    /// The page had no links with the extension.
    NoFilesFound {
        page_url: &'a str,
        extension: &'a str,
    },
    /// Links were found and downloads are about to start.
    FilesFound { page_url: &'a str, count: usize },
    Downloaded { file_url: &'a str, path: &'a Path },
    DownloadFailed {
        file_url: &'a str,
        error: &'a GrabError,
    },
}

impl GrabEvent<'_> {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            GrabEvent::PageFailed { .. } | GrabEvent::DownloadFailed { .. }
        )
    }
}

impl fmt::Display for GrabEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrabEvent::PageFailed { page_url, error } => {
                write!(f, "Error fetching page {}: ", page_url)?;
                write_error_chain(f, error)
            }
            GrabEvent::NoFilesFound {
                page_url,
                extension,
            } => write!(
                f,
                "No files with extension '{}' found on {}",
                extension, page_url
            ),
            GrabEvent::FilesFound { page_url, count } => {
                write!(f, "Found {} files to download on {}", count, page_url)
            }
            GrabEvent::Downloaded { path, .. } => write!(f, "Downloaded: {}", path.display()),
            GrabEvent::DownloadFailed { file_url, error } => {
                write!(f, "Error downloading {}: ", file_url)?;
                write_error_chain(f, error)
            }
        }
    }
}

/// `error: cause: cause...`
fn write_error_chain(f: &mut fmt::Formatter<'_>, error: &GrabError) -> fmt::Result {
    write!(f, "{}", error)?;
    let mut source = error.source();
    while let Some(cause) = source {
        write!(f, ": {}", cause)?;
        source = cause.source();
    }
    Ok(())
}

impl<T: Transport> FileDownloader<T> {
    /// Downloads every file linked from `page_url` with the given extension
    /// into `download_dir`. Returns how many downloads succeeded.
    pub fn download_files_from_page(
        &self,
        page_url: &str,
        extension: &str,
        download_dir: &Path,
    ) -> usize {
        self.download_files_from_page_with(page_url, extension, download_dir, |_| {})
    }

    /// Like `download_files_from_page`, reporting progress and failures to
    /// `on_event` as they happen.
    ///
    /// An invalid page URL, a failed page fetch or an empty link list ends
    /// the run with 0 and no download attempts. A failed download is reported
    /// and the run goes on with the next link.
    pub fn download_files_from_page_with<F>(
        &self,
        page_url: &str,
        extension: &str,
        download_dir: &Path,
        mut on_event: F,
    ) -> usize
    where
        F: FnMut(GrabEvent<'_>),
    {
        let fetched = self
            .base_for_page(page_url)
            .and_then(|base| Ok((base, self.fetch_page_content(page_url)?)));
        let (base, html) = match fetched {
            Ok(fetched) => fetched,
            Err(error) => {
                tracing::warn!(page_url, error = %error, "page fetch failed");
                on_event(GrabEvent::PageFailed {
                    page_url,
                    error: &error,
                });
                return 0;
            }
        };

        let links = links::parse_file_links(&html, extension, Some(&base));
        if links.is_empty() {
            tracing::info!(page_url, extension, "no matching links");
            on_event(GrabEvent::NoFilesFound {
                page_url,
                extension,
            });
            return 0;
        }
        tracing::info!(page_url, count = links.len(), "found matching links");
        on_event(GrabEvent::FilesFound {
            page_url,
            count: links.len(),
        });

        let mut succeeded = 0;
        for file_url in links.iter().map(String::as_str) {
            match self.download_file(file_url, download_dir) {
                Ok(path) => {
                    succeeded += 1;
                    on_event(GrabEvent::Downloaded {
                        file_url,
                        path: &path,
                    });
                }
                Err(error) => {
                    tracing::warn!(file_url, error = %error, "download failed");
                    on_event(GrabEvent::DownloadFailed {
                        file_url,
                        error: &error,
                    });
                }
            }
        }
        tracing::info!(page_url, succeeded, attempted = links.len(), "page done");
        succeeded
    }

    /// Runs the page run for each of `page_urls` in order and sums the counts.
    /// Without a configured base URL each page resolves its own links.
    pub fn download_files_from_pages_with<F>(
        &self,
        page_urls: &[String],
        extension: &str,
        download_dir: &Path,
        mut on_event: F,
    ) -> usize
    where
        F: FnMut(GrabEvent<'_>),
    {
        page_urls
            .iter()
            .map(|page| {
                self.download_files_from_page_with(page, extension, download_dir, &mut on_event)
            })
            .sum()
    }
}
