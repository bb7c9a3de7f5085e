//src/reader.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{HistoneError, Result};

/// Opens a text input, wrapping it in a `MultiGzDecoder` when the name ends in `.gz`.
///
/// A path that does not exist is reported as `HistoneError::MissingFile`.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| HistoneError::from_open(e, path))?;

    let is_gz = path
        .extension()
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gz {
        Box::new(BufReader::new(MultiGzDecoder::new(f)))
    } else {
        Box::new(BufReader::new(f))
    };
    Ok(reader)
}

/// Reads every line of `path` into memory, with line terminators removed.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let reader = open_input(path)?;
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}

/// The part of a path's file name before its first `.`.
///
/// `data/ath_ids.txt` gives `ath_ids`, `best.hits.tsv` gives `best`.
pub fn stem_before_first_dot<P: AsRef<Path>>(path: P) -> String {
    let name = path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or_default().to_string()
}
