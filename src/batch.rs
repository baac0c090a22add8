use std::path::PathBuf;
use tracing::warn;

/// Expand directories into their files, sorted by name.
///
/// Plain paths are passed through untouched. Subdirectories are not
/// descended into, and entries that cannot be read are logged and skipped.
pub fn collect_images(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(input)?
                .filter_map(|e| match e {
                    Ok(entry) => Some(entry.path()),
                    Err(e) => {
                        warn!("Skipping unreadable entry in {}: {}", input.display(), e);
                        None
                    }
                })
                .filter(|p| p.is_file())
                .collect();
            entries.sort();
            images.extend(entries);
        } else {
            images.push(input.clone());
        }
    }
    Ok(images)
}
