//src/fasta.rs

use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::reader::open_input;
use crate::types::SequenceMap;

/// Reads a FASTA file (plain or `.gz`) into an identifier -> sequence map.
///
/// The identifier is the header text up to the first whitespace. Multi-line
/// sequences are joined; a repeated identifier keeps the last sequence.
pub fn read_fasta_map<P: AsRef<Path>>(path: P) -> Result<SequenceMap> {
    let path = path.as_ref();
    let map = parse_fasta(open_input(path)?)?;
    log::info!("Loaded {} sequences from {}", map.len(), path.display());
    Ok(map)
}

pub fn parse_fasta<R: BufRead>(reader: R) -> Result<SequenceMap> {
    let mut sequences = SequenceMap::new();
    let mut current: Option<(String, String)> = None;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if let Some(header) = line.strip_prefix('>') {
            if let Some((id, seq)) = current.take() {
                sequences.insert(id, seq);
            }
            let id = header.split_whitespace().next().unwrap_or("").to_string();
            current = Some((id, String::new()));
        } else if let Some((_, seq)) = current.as_mut() {
            seq.push_str(line);
        }
        // anything before the first header is ignored
    }
    if let Some((id, seq)) = current {
        sequences.insert(id, seq);
    }

    Ok(sequences)
}
