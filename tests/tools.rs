//! End-to-end checks of the four tools against files on disk.

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

use hmm_histone::histone_count::count_proteins_in_file;
use hmm_histone::{
    count_files, fetch_sequences, find_id_files, get_count_table, partition_tblout,
    split_best_hits_file, HistoneClass, HistoneError,
};
use tempfile::tempdir;

const HITS: &str = "\
# target name  accession  query name  accession  E-value
h2a - ath_g1 - 1e-5 10.2
h2b - ath_g1 - 1e-10 40.0
h3 - osa_g7 - 1e-3 12.0
h4 - ath_g2 - 2e-8 22.0
h3 - ath_g2 - 2e-8 21.9
CENH3 - osa_g7 - 5e-1 1.0
";

#[test]
fn best_hit_files_partition_the_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("hits.tbl");
    let best = dir.path().join("best.tsv");
    let worst = dir.path().join("worst.tsv");
    fs::write(&input, HITS).unwrap();

    split_best_hits_file(&input, &best, &worst).unwrap();
    let best_text = fs::read_to_string(&best).unwrap();
    let worst_text = fs::read_to_string(&worst).unwrap();

    assert_eq!(
        best_text,
        "h2b\t-\tath_g1\t-\t1e-10\t40.0\n\
         h3\t-\tosa_g7\t-\t1e-3\t12.0\n\
         h4\t-\tath_g2\t-\t2e-8\t22.0\n"
    );

    // disjoint, and together they are exactly the data rows
    let original: Vec<String> = HITS
        .lines()
        .filter(|l| !l.starts_with('#'))
        .map(|l| l.split_whitespace().collect::<Vec<_>>().join("\t"))
        .collect();
    let mut combined: Vec<String> = best_text.lines().chain(worst_text.lines()).map(String::from).collect();
    let mut expected = original;
    combined.sort();
    expected.sort();
    assert_eq!(combined, expected);

    let best_set: HashSet<&str> = best_text.lines().collect();
    assert!(worst_text.lines().all(|l| !best_set.contains(l)));
}

#[test]
fn best_row_per_gene_has_minimal_evalue() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("hits.tbl");
    fs::write(&input, HITS).unwrap();

    let split = split_best_hits_file(&input, dir.path().join("b"), dir.path().join("w")).unwrap();
    let genes: Vec<&str> = split.best.iter().map(|r| r.gene_id()).collect();
    assert_eq!(genes, vec!["ath_g1", "osa_g7", "ath_g2"]);

    for best in &split.best {
        for other in split.worst.iter().filter(|r| r.gene_id() == best.gene_id()) {
            assert!(best.e_value <= other.e_value);
        }
    }
}

#[test]
fn best_hit_missing_input() {
    let dir = tempdir().unwrap();
    let err = split_best_hits_file(
        dir.path().join("nope.tbl"),
        dir.path().join("b"),
        dir.path().join("w"),
    )
    .unwrap_err();
    assert!(matches!(err, HistoneError::MissingFile { .. }));
    assert!(!dir.path().join("b").exists());
}

#[test]
fn fetch_tags_headers_and_is_repeatable() {
    let dir = tempdir().unwrap();
    let ids = dir.path().join("ath_best.hits.tsv");
    let fasta = dir.path().join("proteome.fa");
    fs::write(&ids, "h2a\t-\tath_g2\t-\t1e-5\nh3\t-\tmissing\t-\t1e-4\nh4\t-\tath_g1\t-\t1e-3\n").unwrap();
    fs::write(&fasta, ">ath_g1 histone H4\nMSGRG\nKGGKG\n>ath_g2\nMAGRG\n").unwrap();

    let first = fetch_sequences(&ids, &fasta).unwrap();
    assert_eq!(first, ">ath_g2|ath_best\nMAGRG\n>ath_g1|ath_best\nMSGRGKGGKG\n");

    let second = fetch_sequences(&ids, &fasta).unwrap();
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn histone_counts_per_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ath_ids.txt"), "h2a_1\nh3_2\nunrelated_3\nh2a_4\n").unwrap();
    fs::write(dir.path().join("osa_ids.txt"), "h2b_1\nh4_9\nCENH3_1\nH3_lower\n").unwrap();
    fs::write(dir.path().join("readme.md"), "h2a_1\n").unwrap();

    let mut files = find_id_files(dir.path()).unwrap();
    files.sort();
    assert_eq!(files.len(), 2);

    let rows = count_files(&files).unwrap();
    assert_eq!(
        get_count_table(&rows),
        "Plant Name\th2a\th2b\th3\th4\tcenh3\n\
         ath_ids\t2\t0\t1\t0\t0\n\
         osa_ids\t0\t1\t0\t1\t1\n"
    );

    let ath = count_proteins_in_file(dir.path().join("ath_ids.txt")).unwrap();
    assert_eq!(ath.total(), 3);
    assert_eq!(ath.get(HistoneClass::H2a), 2);
}

#[test]
fn tblout_split_by_prefix() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("search.tblout");
    let prefixes = dir.path().join("prefixes.tsv");
    fs::write(&prefixes, "ath\tArabidopsis\nosa\tRice\n").unwrap();
    fs::write(
        &report,
        "# hmmsearch tblout\nq1 - ath_gene1 - 2.3e-20 70.1\nq2 - zma_gene4 - 1e-9 30.0\nq1 - ath_gene2 - 1e-5 20.0\n",
    )
    .unwrap();

    let written = partition_tblout(&report, &prefixes, dir.path()).unwrap();
    assert_eq!(written, vec![dir.path().join("Arabidopsis_histone_ids.txt")]);

    let text = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(text, "q1\tath_gene1\t2.3e-20\nq1\tath_gene2\t1e-5");
    assert!(text.lines().all(|l| l.split('\t').nth(1).unwrap().starts_with("ath")));
    assert!(!text.contains("zma_gene4"));
    assert!(!dir.path().join("Rice_histone_ids.txt").exists());
}

#[test]
fn tblout_overwrites_previous_output() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("r.tbl");
    let prefixes = dir.path().join("p.tsv");
    let out: PathBuf = dir.path().join("Rice_histone_ids.txt");
    fs::write(&out, "stale\nrows\n").unwrap();
    fs::write(&prefixes, "osa\tRice").unwrap();
    fs::write(&report, "q9 - osa_1 - 3e-4\n").unwrap();

    partition_tblout(&report, &prefixes, dir.path()).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "q9\tosa_1\t3e-4");
}

#[test]
fn tblout_bad_mapping_rejects_everything() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("r.tbl");
    let prefixes = dir.path().join("p.tsv");
    fs::write(&prefixes, "ath\tArabidopsis\nosa Rice\n").unwrap();
    fs::write(&report, "q1 - ath_1 - 1e-4\n").unwrap();

    let err = partition_tblout(&report, &prefixes, dir.path()).unwrap_err();
    assert!(matches!(err, HistoneError::InvalidMapping { line: 2, fields: 1, .. }));
    assert!(!dir.path().join("Arabidopsis_histone_ids.txt").exists());
}

#[test]
fn tblout_missing_files() {
    let dir = tempdir().unwrap();
    let prefixes = dir.path().join("p.tsv");
    fs::write(&prefixes, "ath\tArabidopsis\n").unwrap();

    let err = partition_tblout(dir.path().join("none.tbl"), &prefixes, dir.path()).unwrap_err();
    assert!(matches!(err, HistoneError::MissingFile { .. }));

    let err = partition_tblout(dir.path().join("none.tbl"), dir.path().join("none.tsv"), dir.path()).unwrap_err();
    assert!(matches!(err, HistoneError::MissingFile { .. }));
}
