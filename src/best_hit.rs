//src/best_hit.rs

use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::BufRead;
use std::path::Path;

use ahash::AHashMap;

use crate::error::{HistoneError, Result};
use crate::reader::open_input;
use crate::types::HitRecord;

/// Gene id sits in column 3 and the e-value in column 5.
pub const MIN_HIT_COLUMNS: usize = 5;

/// Rows of a hit table split into the best hit per gene and everything else.
#[derive(Debug, Clone, Default)]
pub struct BestHitSplit {
    /// One row per gene id, ordered by the gene's first appearance.
    pub best: Vec<HitRecord>,
    /// All remaining rows, in file order.
    pub worst: Vec<HitRecord>,
}

impl BestHitSplit {
    pub fn get_best_text(&self) -> String {
        rows_to_tsv(&self.best)
    }

    pub fn get_worst_text(&self) -> String {
        rows_to_tsv(&self.worst)
    }
}

fn rows_to_tsv(rows: &[HitRecord]) -> String {
    let mut output = String::new();
    for row in rows {
        writeln!(output, "{}", row.to_tsv()).unwrap();
    }
    output
}

/// Parses a hit table. `#` lines and blank lines are skipped.
///
/// The first data row fixes the column count; a later row with a different
/// count, fewer than five columns, or an unparsable e-value is an error
/// naming the offending line.
pub fn parse_hit_table<R: BufRead>(reader: R) -> Result<Vec<HitRecord>> {
    let mut records = Vec::new();
    let mut arity: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
        match arity {
            None => {
                if fields.len() < MIN_HIT_COLUMNS {
                    return Err(HistoneError::TooFewColumns {
                        line: line_no,
                        expected: MIN_HIT_COLUMNS,
                        found: fields.len(),
                    });
                }
                arity = Some(fields.len());
            }
            Some(expected) if expected != fields.len() => {
                return Err(HistoneError::RaggedRow {
                    line: line_no,
                    expected,
                    found: fields.len(),
                });
            }
            Some(_) => {}
        }

        let raw = &fields[4];
        let e_value = raw
            .parse::<f64>()
            .map_err(|_| HistoneError::InvalidEValue {
                line: line_no,
                value: raw.clone(),
            })?;

        records.push(HitRecord {
            line: line_no,
            fields,
            e_value,
        });
    }

    Ok(records)
}

/// Picks the minimum e-value row for every gene id.
///
/// Ties go to the row that appears first. A NaN e-value only stays best
/// while nothing comparable has been seen for that gene.
pub fn split_best_hits(records: Vec<HitRecord>) -> BestHitSplit {
    let best_order: Vec<usize> = {
        // gene id -> index into `records` of its current best row
        let mut best_idx: AHashMap<&str, usize> = AHashMap::new();
        let mut gene_order: Vec<&str> = Vec::new();

        for (i, rec) in records.iter().enumerate() {
            match best_idx.get_mut(rec.gene_id()) {
                Some(current) => {
                    let held = records[*current].e_value;
                    if rec.e_value < held || (held.is_nan() && !rec.e_value.is_nan()) {
                        *current = i;
                    }
                }
                None => {
                    best_idx.insert(rec.gene_id(), i);
                    gene_order.push(rec.gene_id());
                }
            }
        }
        gene_order.iter().map(|g| best_idx[g]).collect()
    };

    let mut is_best = vec![false; records.len()];
    for &i in &best_order {
        is_best[i] = true;
    }
    log::info!(
        "{} rows, {} distinct genes",
        records.len(),
        best_order.len()
    );

    let mut slots: Vec<Option<HitRecord>> = records.into_iter().map(Some).collect();
    let best = best_order
        .iter()
        .filter_map(|&i| slots[i].take())
        .collect();
    let worst = slots
        .into_iter()
        .zip(is_best)
        .filter_map(|(rec, best)| if best { None } else { rec })
        .collect();

    BestHitSplit { best, worst }
}

/// Reads `input`, splits it, and writes both partitions as headerless TSV.
pub fn split_best_hits_file<P, Q, S>(input: P, best_output: Q, worst_output: S) -> Result<BestHitSplit>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    S: AsRef<Path>,
{
    let records = parse_hit_table(open_input(input)?)?;
    let split = split_best_hits(records);

    fs::write(best_output, split.get_best_text())?;
    fs::write(worst_output, split.get_worst_text())?;

    Ok(split)
}
