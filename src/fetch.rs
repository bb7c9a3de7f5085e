//src/fetch.rs

use std::fmt::Write as FmtWrite;
use std::io::BufRead;
use std::path::Path;

use crate::error::{HistoneError, Result};
use crate::fasta::read_fasta_map;
use crate::reader::{open_input, stem_before_first_dot};
use crate::types::SequenceMap;

/// Gene ids are read from the third column.
const GENE_ID_COLUMN: usize = 2;

/// Gene ids from column 3 of a headerless whitespace-delimited table, in file order.
pub fn read_gene_ids<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.get(GENE_ID_COLUMN) {
            Some(id) => ids.push(id.to_string()),
            None => {
                return Err(HistoneError::TooFewColumns {
                    line: idx + 1,
                    expected: GENE_ID_COLUMN + 1,
                    found: fields.len(),
                })
            }
        }
    }
    Ok(ids)
}

/// Renders `>{id}|{tag}` records for every id found in `sequences`.
///
/// Ids missing from the map are skipped. Repeated ids are emitted again.
pub fn render_matches(gene_ids: &[String], sequences: &SequenceMap, tag: &str) -> String {
    let mut output = String::new();
    let mut missing = 0usize;
    for id in gene_ids {
        match sequences.get(id) {
            Some(seq) => writeln!(output, ">{}|{}\n{}", id, tag, seq).unwrap(),
            None => {
                log::debug!("no sequence for {}", id);
                missing += 1;
            }
        }
    }
    if missing > 0 {
        log::info!("{} of {} ids had no sequence", missing, gene_ids.len());
    }
    output
}

/// Looks up the sequences for the ids listed in `ids_path`, tagging each
/// header with that file's name up to its first `.`.
pub fn fetch_sequences<P: AsRef<Path>, Q: AsRef<Path>>(ids_path: P, fasta_path: Q) -> Result<String> {
    let ids_path = ids_path.as_ref();
    let gene_ids = read_gene_ids(open_input(ids_path)?)?;
    let sequences = read_fasta_map(fasta_path)?;
    let tag = stem_before_first_dot(ids_path);
    Ok(render_matches(&gene_ids, &sequences, &tag))
}
