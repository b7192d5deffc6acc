use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

use crate::ui::Ui;

pub struct DatasetClient {
    client: Client,
}

impl DatasetClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent("olympic-history")
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Stream `url` into `dest`
    pub fn download(&self, url: &str, dest: &Path, ui: &mut impl Ui) -> Result<()> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("Failed to start download of {}", url))?
            .error_for_status()
            .with_context(|| format!("Server refused {}", url))?;

        let total_size = response.content_length().unwrap_or(0);
        let mut file = std::fs::File::create(dest).context("Failed to create destination file")?;

        let mut downloaded: u64 = 0;
        let mut buffer = [0u8; 8192];
        let mut reader = response;

        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .context("Failed to read from response")?;

            if bytes_read == 0 {
                break;
            }

            file.write_all(&buffer[..bytes_read])
                .context("Failed to write to file")?;

            downloaded += bytes_read as u64;
            ui.set_progress(downloaded, total_size, format_bytes(downloaded, total_size));
        }

        ui.clear_progress();
        info!(bytes = downloaded, "Downloaded {}", url);
        ui.log("Download complete");
        Ok(())
    }
}

/// Last path segment of a URL, without query or fragment
pub fn file_name_from_url(url: &str) -> Option<&str> {
    let path = url.split(&['?', '#'][..]).next()?;
    let name = path.rsplit('/').next()?;
    if name.is_empty() || !name.contains('.') {
        None
    } else {
        Some(name)
    }
}

/// Format bytes as human-readable string
fn format_bytes(current: u64, total: u64) -> String {
    fn fmt(bytes: u64) -> String {
        if bytes >= 1_000_000_000 {
            format!("{:.1} GB", bytes as f64 / 1_000_000_000.0)
        } else if bytes >= 1_000_000 {
            format!("{:.1} MB", bytes as f64 / 1_000_000.0)
        } else if bytes >= 1_000 {
            format!("{:.1} KB", bytes as f64 / 1_000.0)
        } else {
            format!("{} B", bytes)
        }
    }
    format!("{} / {}", fmt(current), fmt(total))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(500, 999), "500 B / 999 B");
        assert_eq!(format_bytes(1_500_000, 40_000_000), "1.5 MB / 40.0 MB");
    }

    #[test]
    fn test_file_name_from_url() {
        assert_eq!(
            file_name_from_url("https://example.org/data/athlete_events.csv.zip?dl=1"),
            Some("athlete_events.csv.zip")
        );
        assert_eq!(
            file_name_from_url("https://example.org/athlete_events.csv"),
            Some("athlete_events.csv")
        );
        assert_eq!(file_name_from_url("https://example.org/download/"), None);
    }
}
