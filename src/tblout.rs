//src/tblout.rs

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use ahash::AHashMap;

use crate::error::{HistoneError, Result};
use crate::reader::{open_input, read_lines};
use crate::types::{PrefixMapping, TbloutRow};

/// Columns needed to reach the e-value at index 4.
pub const MIN_TBLOUT_COLUMNS: usize = 5;

/// Suffix of every per-organism output file.
pub const OUTPUT_SUFFIX: &str = "_histone_ids.txt";

/// Rows of a tblout report grouped by organism.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    /// Organisms in order of their first matching row.
    pub organisms: Vec<String>,
    pub rows: AHashMap<String, Vec<TbloutRow>>,
    /// Rows whose protein id matched no prefix.
    pub unmatched: usize,
}

impl Partition {
    /// The contents of one organism's output file: rows joined by `\n`, no trailing newline.
    pub fn get_organism_text(&self, organism: &str) -> Option<String> {
        self.rows.get(organism).map(|rows| {
            rows.iter()
                .map(TbloutRow::to_tsv)
                .collect::<Vec<_>>()
                .join("\n")
        })
    }
}

/// Reads a two-column `prefix<TAB>organism` file.
///
/// Any row without exactly two columns rejects the whole file.
pub fn read_prefix_mapping<P: AsRef<Path>>(path: P) -> Result<PrefixMapping> {
    let path = path.as_ref();
    let mut mapping = PrefixMapping::new();
    for (idx, line) in read_lines(path)?.iter().enumerate() {
        let parts: Vec<&str> = line.split('\t').collect();
        if let &[prefix, organism] = parts.as_slice() {
            mapping.insert(prefix, organism);
        } else {
            return Err(HistoneError::InvalidMapping {
                path: path.to_path_buf(),
                line: idx + 1,
                fields: parts.len(),
            });
        }
    }
    if mapping.is_empty() {
        log::warn!("{} holds no prefixes; every row will be dropped", path.display());
    } else {
        log::info!("Loaded {} prefixes from {}", mapping.len(), path.display());
    }
    Ok(mapping)
}

/// Parses tblout rows, skipping `#` comments and blank lines.
pub fn parse_tblout<R: BufRead>(reader: R) -> Result<Vec<TbloutRow>> {
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let columns: Vec<&str> = line.split_whitespace().collect();
        if columns.len() < MIN_TBLOUT_COLUMNS {
            return Err(HistoneError::TooFewColumns {
                line: idx + 1,
                expected: MIN_TBLOUT_COLUMNS,
                found: columns.len(),
            });
        }
        rows.push(TbloutRow {
            query_name: columns[0].to_string(),
            protein_id: columns[2].to_string(),
            e_value: columns[4].to_string(),
        });
    }
    Ok(rows)
}

/// Routes each row to the organism of the first prefix its protein id starts with.
pub fn partition_rows(rows: Vec<TbloutRow>, mapping: &PrefixMapping) -> Partition {
    let mut partition = Partition::default();
    for row in rows {
        let Some(organism) = mapping.organism_for(&row.protein_id) else {
            log::debug!("no prefix matches {}", row.protein_id);
            partition.unmatched += 1;
            continue;
        };
        if !partition.rows.contains_key(organism) {
            partition.organisms.push(organism.to_string());
        }
        partition
            .rows
            .entry(organism.to_string())
            .or_default()
            .push(row);
    }
    partition
}

/// Writes `{organism}_histone_ids.txt` under `out_dir` for every organism with rows.
pub fn write_partition<P: AsRef<Path>>(partition: &Partition, out_dir: P) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(partition.organisms.len());
    for organism in &partition.organisms {
        if let Some(text) = partition.get_organism_text(organism) {
            let path = out_dir.as_ref().join(format!("{}{}", organism, OUTPUT_SUFFIX));
            fs::write(&path, text)?;
            written.push(path);
        }
    }
    Ok(written)
}

/// Loads the mapping and the report, then writes one file per matched organism.
pub fn partition_tblout<P, Q, D>(tblout_path: P, prefix_path: Q, out_dir: D) -> Result<Vec<PathBuf>>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    D: AsRef<Path>,
{
    let mapping = read_prefix_mapping(prefix_path)?;
    let rows = parse_tblout(open_input(tblout_path)?)?;
    let partition = partition_rows(rows, &mapping);
    log::info!(
        "{} organism(s) matched, {} row(s) unmatched",
        partition.organisms.len(),
        partition.unmatched
    );
    write_partition(&partition, out_dir)
}
