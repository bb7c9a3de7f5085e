//src/histone_count.rs

use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::{HistoneError, Result};
use crate::reader::{open_input, stem_before_first_dot};
use crate::types::{HistoneClass, ProteinCounts};

/// File name suffix of per-organism id lists.
pub const IDS_SUFFIX: &str = "_ids.txt";

pub const TABLE_HEADER: &str = "Plant Name\th2a\th2b\th3\th4\tcenh3";

/// Tallies histone families over one id per line. Unrecognised lines are ignored.
pub fn count_proteins<R: BufRead>(reader: R, organism: &str) -> Result<ProteinCounts> {
    let mut counts = ProteinCounts::new(organism);
    for line in reader.lines() {
        let line = line?;
        if let Some(class) = HistoneClass::classify(line.trim()) {
            counts.add(class);
        }
    }
    Ok(counts)
}

pub fn count_proteins_in_file<P: AsRef<Path>>(path: P) -> Result<ProteinCounts> {
    let path = path.as_ref();
    count_proteins(open_input(path)?, &stem_before_first_dot(path))
}

/// Counts every file in `paths`, keeping their order.
pub fn count_files(paths: &[PathBuf]) -> Result<Vec<ProteinCounts>> {
    paths.iter().map(count_proteins_in_file).collect()
}

/// Files in `dir` whose name ends with `_ids.txt`, in directory-listing order.
///
/// Fails with `NoInputFiles` when there are none.
pub fn find_id_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            let filename = path.file_name()?.to_string_lossy().into_owned();
            if filename.ends_with(IDS_SUFFIX) {
                Some(path)
            } else {
                None
            }
        })
        .collect();

    if files.is_empty() {
        return Err(HistoneError::NoInputFiles {
            dir: dir.to_path_buf(),
        });
    }
    log::info!("Found {} id file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// The summary table: header, then one row per organism.
pub fn get_count_table(rows: &[ProteinCounts]) -> String {
    let mut output = String::new();
    output.push_str(TABLE_HEADER);
    output.push('\n');
    for row in rows {
        output.push_str(&row.organism);
        for class in HistoneClass::ALL {
            write!(output, "\t{}", row.get(class)).unwrap();
        }
        output.push('\n');
    }
    output
}
