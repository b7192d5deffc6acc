use anyhow::{bail, Context, Result};
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::ui::Ui;

/// Extract the `.csv` members of a zip archive into `dest_dir`, flattening
/// any directory prefix. Returns the extracted paths.
pub fn extract_csv(zip_path: &Path, dest_dir: &Path, ui: &mut impl Ui) -> Result<Vec<PathBuf>> {
    let file = File::open(zip_path).context("Failed to open zip file")?;
    let reader = BufReader::new(file);
    let mut archive = ZipArchive::new(reader).context("Failed to read zip archive")?;

    fs::create_dir_all(dest_dir).context("Failed to create destination directory")?;

    let total_files = archive.len();
    let mut extracted = Vec::new();

    for i in 0..total_files {
        let mut member = archive
            .by_index(i)
            .context("Failed to read file from archive")?;

        let name = member.name().to_string();
        let file_name = Path::new(&name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(&name)
            .to_string();

        ui.set_progress(i as u64 + 1, total_files as u64, "Extracting");

        if !file_name.to_ascii_lowercase().ends_with(".csv") || member.is_dir() {
            continue;
        }

        let dest_path = dest_dir.join(&file_name);
        let mut dest_file = File::create(&dest_path)
            .with_context(|| format!("Failed to create file: {:?}", dest_path))?;

        io::copy(&mut member, &mut dest_file)
            .with_context(|| format!("Failed to extract: {}", file_name))?;

        ui.log(format!("Extracted {}", file_name));
        extracted.push(dest_path);
    }

    ui.clear_progress();

    if extracted.is_empty() {
        bail!("No .csv file found in {:?}", zip_path);
    }
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SilentUi;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, members: &[(&str, &str)]) {
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        for (name, body) in members {
            zip.start_file(*name, SimpleFileOptions::default()).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_extracts_only_csv_members() {
        let dir = TempDir::new().unwrap();
        let zip_path = dir.path().join("data.zip");
        write_zip(
            &zip_path,
            &[("nested/athlete_events.csv", "ID,Name\n"), ("notes.txt", "hello")],
        );

        let out = dir.path().join("out");
        let paths = extract_csv(&zip_path, &out, &mut SilentUi).unwrap();
        assert_eq!(paths, vec![out.join("athlete_events.csv")]);
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "ID,Name\n");
        assert!(!out.join("notes.txt").exists());
    }

    #[test]
    fn test_archive_without_csv_fails() {
        let dir = TempDir::new().unwrap();
        let zip_path = dir.path().join("data.zip");
        write_zip(&zip_path, &[("notes.txt", "hello")]);
        assert!(extract_csv(&zip_path, &dir.path().join("out"), &mut SilentUi).is_err());
    }
}
