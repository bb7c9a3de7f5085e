// src/lib.rs
//! Post-processing for HMMER histone searches.
//!
//! Four small tools share this library:
//! - [`best_hit`]: keep the lowest e-value row per gene, split off the rest
//! - [`fetch`]: pull FASTA sequences for the genes in a hit table
//! - [`histone_count`]: count histone families in per-organism id lists
//! - [`tblout`]: route tblout rows to per-organism files by id prefix
pub mod error;
pub mod types;
pub mod reader;
pub mod fasta;
pub mod best_hit;
pub mod fetch;
pub mod histone_count;
pub mod tblout;
pub mod progress;

pub use crate::error::{HistoneError, Result};
pub use crate::types::{HistoneClass, HitRecord, PrefixMapping, ProteinCounts, SequenceMap, TbloutRow};
pub use crate::best_hit::{split_best_hits, split_best_hits_file, BestHitSplit};
pub use crate::fetch::fetch_sequences;
pub use crate::histone_count::{count_files, find_id_files, get_count_table};
pub use crate::tblout::{partition_tblout, Partition};
