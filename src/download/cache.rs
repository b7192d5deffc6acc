use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Local directory holding downloaded datasets
pub struct CacheManager {
    cache_dir: PathBuf,
}

impl CacheManager {
    pub fn new(custom_dir: Option<PathBuf>) -> Result<Self> {
        let cache_dir = match custom_dir {
            Some(dir) => dir,
            None => {
                let proj_dirs = ProjectDirs::from("", "", "olympic-history")
                    .context("Could not determine cache directory")?;
                proj_dirs.cache_dir().to_path_buf()
            }
        };

        fs::create_dir_all(&cache_dir)
            .context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Where a downloaded file is stored
    pub fn download_path(&self, file_name: &str) -> PathBuf {
        self.cache_dir.join(file_name)
    }

    /// Directory an archive is unpacked into, named after the archive stem
    pub fn extract_dir(&self, archive_name: &str) -> PathBuf {
        let stem = Path::new(archive_name)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(archive_name);
        self.cache_dir.join(stem)
    }

    /// First `.csv` file in `dir`, by name
    pub fn find_csv(&self, dir: &Path) -> Result<Option<PathBuf>> {
        if !dir.is_dir() {
            return Ok(None);
        }

        let mut csvs: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")))
            .collect();
        csvs.sort();
        Ok(csvs.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_inside_custom_dir() {
        let dir = TempDir::new().unwrap();
        let cache = CacheManager::new(Some(dir.path().join("cache"))).unwrap();
        assert!(cache.cache_dir().is_dir());
        assert_eq!(
            cache.download_path("athlete_events.zip"),
            dir.path().join("cache").join("athlete_events.zip")
        );
        assert_eq!(
            cache.extract_dir("athlete_events.zip"),
            dir.path().join("cache").join("athlete_events")
        );
    }

    #[test]
    fn test_find_csv() {
        let dir = TempDir::new().unwrap();
        let cache = CacheManager::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(cache.find_csv(&dir.path().join("missing")).unwrap(), None);

        fs::write(dir.path().join("readme.txt"), "x").unwrap();
        fs::write(dir.path().join("noc_regions.csv"), "x").unwrap();
        fs::write(dir.path().join("athlete_events.csv"), "x").unwrap();
        assert_eq!(
            cache.find_csv(dir.path()).unwrap(),
            Some(dir.path().join("athlete_events.csv"))
        );
    }
}
