pub mod cache;
pub mod client;
pub mod extract;

pub use cache::*;
pub use client::*;
pub use extract::*;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::ui::{Phase, Ui};

/// Fetch the dataset at `url` into the cache unless already there, unpacking
/// zip archives. Returns the path of the CSV file to load.
pub fn ensure_dataset_downloaded(
    url: &str,
    cache_dir: Option<PathBuf>,
    force: bool,
    ui: &mut impl Ui,
) -> Result<PathBuf> {
    let cache = CacheManager::new(cache_dir)?;
    let file_name = file_name_from_url(url)
        .with_context(|| format!("Cannot derive a file name from {}", url))?;
    let download_path = cache.download_path(file_name);
    let is_zip = file_name.to_ascii_lowercase().ends_with(".zip");

    if !force {
        let cached = if is_zip {
            cache.find_csv(&cache.extract_dir(file_name))?
        } else {
            Some(download_path.clone()).filter(|p| p.exists())
        };
        if let Some(path) = cached {
            info!("Using cached dataset {:?}", path);
            ui.log(format!("Using cached {}", path.display()));
            return Ok(path);
        }
    }

    if force || !download_path.exists() {
        ui.set_phase(Phase::Downloading);
        ui.set_info(url.to_string());
        DatasetClient::new()?.download(url, &download_path, ui)?;
    }

    if !is_zip {
        return Ok(download_path);
    }

    let extract_dir = cache.extract_dir(file_name);
    extract_csv(&download_path, &extract_dir, ui)?;
    cache
        .find_csv(&extract_dir)?
        .with_context(|| format!("No CSV extracted from {:?}", download_path))
}
