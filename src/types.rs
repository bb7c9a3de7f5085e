//src/types.rs

use ahash::AHashMap;

/// One data row of a whitespace-delimited hit table (hmmscan `--tblout` style).
///
/// Fields are kept as written so rows can be echoed back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRecord {
    /// 1-based line number in the source file.
    pub line: usize,
    pub fields: Vec<String>,
    pub e_value: f64,
}

impl HitRecord {
    /// Query / HMM name (column 1).
    pub fn query_name(&self) -> &str {
        &self.fields[0]
    }

    /// Gene / target identifier (column 3).
    pub fn gene_id(&self) -> &str {
        &self.fields[2]
    }

    /// The row as a tab-separated line, without terminator.
    pub fn to_tsv(&self) -> String {
        self.fields.join("\t")
    }
}

/// The three columns of a tblout row that end up in per-organism files.
#[derive(Debug, Clone, PartialEq)]
pub struct TbloutRow {
    pub query_name: String,
    pub protein_id: String,
    /// Kept verbatim, never reparsed.
    pub e_value: String,
}

impl TbloutRow {
    pub fn to_tsv(&self) -> String {
        format!("{}\t{}\t{}", self.query_name, self.protein_id, self.e_value)
    }
}

/// Ordered `(prefix, organism)` pairs read from a two-column TSV.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefixMapping {
    entries: Vec<(String, String)>,
}

impl PrefixMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pair. A prefix seen before keeps its position and takes the new organism.
    pub fn insert(&mut self, prefix: &str, organism: &str) {
        match self.entries.iter_mut().find(|(p, _)| p == prefix) {
            Some(entry) => entry.1 = organism.to_string(),
            None => self
                .entries
                .push((prefix.to_string(), organism.to_string())),
        }
    }

    /// Organism of the first prefix, in file order, that `protein_id` starts with.
    pub fn organism_for(&self, protein_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(prefix, _)| protein_id.starts_with(prefix.as_str()))
            .map(|(_, organism)| organism.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Identifier -> sequence, as read from a FASTA file.
pub type SequenceMap = AHashMap<String, String>;

/// Histone families recognised by `histone_count`, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoneClass {
    H2a,
    H2b,
    H3,
    H4,
    Cenh3,
}

impl HistoneClass {
    pub const ALL: [HistoneClass; 5] = [
        HistoneClass::H2a,
        HistoneClass::H2b,
        HistoneClass::H3,
        HistoneClass::H4,
        HistoneClass::Cenh3,
    ];

    /// The identifier prefix for this family. Case sensitive.
    pub fn label(self) -> &'static str {
        match self {
            HistoneClass::H2a => "h2a",
            HistoneClass::H2b => "h2b",
            HistoneClass::H3 => "h3",
            HistoneClass::H4 => "h4",
            HistoneClass::Cenh3 => "CENH3",
        }
    }

    /// First family whose label starts `gene_id`.
    pub fn classify(gene_id: &str) -> Option<HistoneClass> {
        Self::ALL
            .into_iter()
            .find(|class| gene_id.starts_with(class.label()))
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-file histone family counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProteinCounts {
    pub organism: String,
    counts: [u32; 5],
}

impl ProteinCounts {
    pub fn new(organism: impl Into<String>) -> Self {
        Self {
            organism: organism.into(),
            counts: [0; 5],
        }
    }

    pub fn add(&mut self, class: HistoneClass) {
        self.counts[class.index()] += 1;
    }

    pub fn get(&self, class: HistoneClass) -> u32 {
        self.counts[class.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}
