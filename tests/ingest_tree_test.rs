//! End-to-end ingestion tests over real directory trees.
//!
//! Each test builds a small result tree in a temp directory, runs the
//! loader against it, and checks the reconstructed model.

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use tspsuite_ingest::model::ExperimentStore;
use tspsuite_ingest::{Decoding, Error, InstanceCatalog, TspSuiteLoader};

const BASIC_LOG: &str = "\
// written by the benchmark harness
ALGORITHM_DATA_SECTION
algorithm: aco
seed: 42
SECTION_END

LOG_DATA_SECTION
108 108 21 0.0014 36542
512 512 96 0.0067 34102
SECTION_END
";

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn ingest(root: &Path) -> (tspsuite_ingest::LoadStats, ExperimentStore) {
    let mut store = ExperimentStore::new();
    let stats = TspSuiteLoader::new().load(root, &mut store).unwrap();
    (stats, store)
}

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn test_single_run_round_trip() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("aco/att48/run_01.txt"), BASIC_LOG);

    let (stats, store) = ingest(root.path());

    assert_eq!(stats.runs_loaded, 1);
    assert_eq!(stats.files_loaded, 1);
    assert_eq!(store.run_count(), 1);

    let run = &store.runs()[0];
    assert_eq!(run.experiment(), "aco");
    assert_eq!(run.instance(), "att48");
    assert_eq!(
        run.data_points(),
        ["108 108 21 0.0014 36542", "512 512 96 0.0067 34102"]
    );
    assert_eq!(run.parameter("algorithm"), Some("aco"));
    assert_eq!(run.parameter("seed"), Some("42"));
    assert!(run.source().ends_with("aco/att48/run_01.txt"));
}

#[test]
fn test_multiple_experiments_and_instances() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("aco/att48/run_01.txt"), BASIC_LOG);
    write(&root.path().join("aco/att48/run_02.txt"), BASIC_LOG);
    write(&root.path().join("aco/berlin52/run_01.txt"), BASIC_LOG);
    write(&root.path().join("sa/att48/run_01.txt"), BASIC_LOG);

    let (stats, store) = ingest(root.path());

    assert_eq!(stats.runs_loaded, 4);
    assert_eq!(store.experiment_count(), 2);
    assert_eq!(store.runs_for_experiment("aco").len(), 3);
    assert_eq!(store.runs_for_experiment("sa").len(), 1);
    assert_eq!(store.runs_for_instance("att48").len(), 3);
    assert_eq!(store.runs_for_instance("berlin52").len(), 1);

    // scope frames popped correctly: no run leaked across experiments
    for run in store.runs_for_experiment("sa") {
        assert!(run.source().to_string_lossy().contains("/sa/"));
    }
}

#[test]
fn test_runs_resolve_through_nested_plain_directories() {
    // instance dirs may sit arbitrarily deep below the experiment root
    let root = TempDir::new().unwrap();
    write(
        &root.path().join("aco/batch_1/results/att48/run_01.txt"),
        BASIC_LOG,
    );

    let (stats, store) = ingest(root.path());

    assert_eq!(stats.runs_loaded, 1);
    let run = &store.runs()[0];
    assert_eq!(run.experiment(), "aco");
    assert_eq!(run.instance(), "att48");
}

// =============================================================================
// Loadability and format looseness
// =============================================================================

#[test]
fn test_mixed_case_suffix_and_markers() {
    let root = TempDir::new().unwrap();
    write(
        &root.path().join("aco/att48/RUN_01.TXT"),
        "log_data_section\n1 2 3 0.1 99\nsection_end\n",
    );

    let (stats, store) = ingest(root.path());

    assert_eq!(stats.runs_loaded, 1);
    assert_eq!(store.runs()[0].data_points(), ["1 2 3 0.1 99"]);
}

#[test]
fn test_non_run_log_files_are_skipped() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("aco/att48/run_01.txt"), BASIC_LOG);
    write(&root.path().join("aco/att48/run_01.txtx"), BASIC_LOG);
    write(&root.path().join("aco/att48/notes.md"), "# notes\n");

    let (stats, store) = ingest(root.path());

    assert_eq!(stats.runs_loaded, 1);
    assert_eq!(stats.files_loaded, 1);
    assert_eq!(stats.files_skipped, 2);
    assert_eq!(store.run_count(), 1);
}

#[test]
fn test_missing_section_end_still_finalizes_run() {
    let root = TempDir::new().unwrap();
    write(
        &root.path().join("aco/att48/run_01.txt"),
        "LOG_DATA_SECTION\n1 2 3 0.1 99\n4 5 6 0.2 98\n",
    );

    let (stats, store) = ingest(root.path());

    assert_eq!(stats.runs_loaded, 1);
    assert_eq!(store.runs()[0].data_points().len(), 2);
}

#[test]
fn test_comment_only_file_yields_no_run() {
    let root = TempDir::new().unwrap();
    write(
        &root.path().join("aco/att48/readme.txt"),
        "// just a note, no sections\n",
    );

    let (stats, store) = ingest(root.path());

    assert_eq!(stats.files_loaded, 1);
    assert_eq!(stats.runs_loaded, 0);
    assert_eq!(store.run_count(), 0);
}

#[test]
fn test_case_insensitive_instance_directory() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("aco/ATT48/run_01.txt"), BASIC_LOG);

    let (_, store) = ingest(root.path());

    // directory casing normalizes to the canonical catalogue name
    assert_eq!(store.runs()[0].instance(), "att48");
}

// =============================================================================
// Failure behavior
// =============================================================================

#[test]
fn test_run_log_outside_instance_scope_fails_loudly() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("notes/info.txt"), BASIC_LOG);

    let mut store = ExperimentStore::new();
    let err = TspSuiteLoader::new().load(root.path(), &mut store);
    assert!(matches!(err, Err(Error::OrphanRunLog { .. })));
}

#[test]
fn test_strict_decoding_rejects_invalid_utf8() {
    let root = TempDir::new().unwrap();
    let file = root.path().join("aco/att48/run_01.txt");
    fs::create_dir_all(file.parent().unwrap()).unwrap();
    fs::write(&file, b"LOG_DATA_SECTION\n1 2 \xff3\nSECTION_END\n").unwrap();

    let strict = TspSuiteLoader::builder().decoding(Decoding::Strict).build();
    let mut store = ExperimentStore::new();
    let err = strict.load(root.path(), &mut store);
    assert!(matches!(err, Err(Error::Io { .. })));
    // the run opened before the bad byte is still finalized, not dropped
    assert_eq!(store.run_count(), 1);

    let lossy = TspSuiteLoader::new();
    let mut store = ExperimentStore::new();
    let stats = lossy.load(root.path(), &mut store).unwrap();
    assert_eq!(stats.runs_loaded, 1);
}

#[test]
fn test_missing_root_is_an_error() {
    let mut store = ExperimentStore::new();
    let err = TspSuiteLoader::new().load(Path::new("/no/such/tree"), &mut store);
    assert!(matches!(err, Err(Error::NotADirectory(_))));
}

// =============================================================================
// Custom catalogues and stats
// =============================================================================

#[test]
fn test_custom_catalogue() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("greedy/maze9/run_01.txt"), BASIC_LOG);

    let catalog = InstanceCatalog::from_names(["maze9", "spiral4"]);
    let mut store = ExperimentStore::with_catalog(catalog);
    let stats = TspSuiteLoader::new().load(root.path(), &mut store).unwrap();

    assert_eq!(stats.runs_loaded, 1);
    assert_eq!(store.instance_count(), 2);
    assert_eq!(store.runs()[0].instance(), "maze9");
}

#[test]
fn test_stats_count_directories() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("aco/att48/run_01.txt"), BASIC_LOG);
    write(&root.path().join("aco/berlin52/run_01.txt"), BASIC_LOG);

    let (stats, _) = ingest(root.path());

    // root + aco + att48 + berlin52
    assert_eq!(stats.directories_visited, 4);
    assert_eq!(stats.files_loaded, 2);
    assert_eq!(stats.files_skipped, 0);
}

#[test]
fn test_store_json_export_contains_runs() {
    let root = TempDir::new().unwrap();
    write(&root.path().join("aco/att48/run_01.txt"), BASIC_LOG);

    let (_, store) = ingest(root.path());
    let json = store.to_json().unwrap();
    assert!(json.contains("run_01.txt"));
    assert!(json.contains("\"seed\": \"42\""));
}
