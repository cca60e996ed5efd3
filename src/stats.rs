//! Recursive line-count and disk-usage listings for a directory tree,
//! computed in-process rather than shelling out to system utilities.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Writes both listings for `target`. Both are computed in full before
/// either output file is written, so a traversal or read failure exits
/// without leaving partial output behind.
pub fn write_directory_stats(
    target: &Path,
    line_count_file: &Path,
    file_size_file: &Path,
) -> Result<()> {
    let line_counts = line_count_listing(target)?;
    let file_sizes = file_size_listing(target)?;

    fs::write(line_count_file, line_counts)
        .with_context(|| format!("failed to write {}", line_count_file.display()))?;
    fs::write(file_size_file, file_sizes)
        .with_context(|| format!("failed to write {}", file_size_file.display()))?;
    Ok(())
}

/// Per-file newline counts in `wc -l` layout, with a trailing total row
/// when more than one file was counted.
pub fn line_count_listing(target: &Path) -> Result<String> {
    let mut out = String::new();
    let mut total = 0u64;
    let mut files = 0usize;

    for entry in WalkDir::new(target).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let bytes = fs::read(entry.path())
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        let count = bytes.iter().filter(|&&b| b == b'\n').count() as u64;
        total += count;
        files += 1;
        writeln!(out, "{:>8} {}", count, entry.path().display())?;
    }
    if files > 1 {
        writeln!(out, "{total:>8} total")?;
    }
    Ok(out)
}

/// Recursive per-entry apparent sizes in `du -ah` layout: every file and
/// directory, children before their directory, the target itself last.
pub fn file_size_listing(target: &Path) -> Result<String> {
    // Directory totals first; the post-order emission below then reads
    // each directory's accumulated size when it is reached.
    let mut dir_totals: HashMap<PathBuf, u64> = HashMap::new();
    for entry in WalkDir::new(target).follow_links(false) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let len = entry.metadata()?.len();
        let mut dir = entry.path().parent();
        while let Some(ancestor) = dir {
            *dir_totals.entry(ancestor.to_path_buf()).or_default() += len;
            if ancestor == target {
                break;
            }
            dir = ancestor.parent();
        }
    }

    let mut out = String::new();
    for entry in WalkDir::new(target)
        .follow_links(false)
        .contents_first(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        let size = if entry.file_type().is_dir() {
            dir_totals.get(entry.path()).copied().unwrap_or(0)
        } else {
            entry.metadata()?.len()
        };
        writeln!(out, "{}\t{}", human_size(size), entry.path().display())?;
    }
    Ok(out)
}

/// `du -h` style figures: bare bytes below 1K, one decimal below ten
/// units, whole numbers above.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [char; 4] = ['K', 'M', 'G', 'T'];

    let mut value = bytes as f64;
    let mut unit = None;
    for candidate in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = Some(candidate);
    }
    match unit {
        None => format!("{bytes}B"),
        Some(suffix) if value < 10.0 => format!("{value:.1}{suffix}"),
        Some(suffix) => format!("{value:.0}{suffix}"),
    }
}
