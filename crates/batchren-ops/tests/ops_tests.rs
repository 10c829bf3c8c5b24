use std::fs;

use batchren_ops::{
    CommitReport, EditLedger, Pattern, PlanError, RenameError, SingleOutcome, commit,
    stage_pattern, stage_single,
};
use batchren_scan::{FilterKind, FilterSpec, Generation, View, list_directory};
use tempfile::TempDir;

fn setup(files: &[&str], dirs: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in files {
        fs::write(temp.path().join(name), name.as_bytes()).unwrap();
    }
    for name in dirs {
        fs::create_dir(temp.path().join(name)).unwrap();
    }
    temp
}

fn list(temp: &TempDir, filter: &FilterSpec, generation: u64) -> View {
    list_directory(temp.path(), filter, Generation(generation)).unwrap()
}

#[test]
fn test_filter_stage_and_apply() {
    let temp = setup(&["a.txt", "b.txt"], &["notes"]);
    let filter = FilterSpec::new()
        .with_kind(FilterKind::Files)
        .with_extension(".txt");
    let view = list(&temp, &filter, 1);

    let names: Vec<_> = view.entries().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["..", "a.txt", "b.txt"]);

    let mut ledger = EditLedger::for_view(&view);
    let row = view.position_of("a.txt").unwrap();
    let outcome = stage_single(&view, &mut ledger, row, "a2").unwrap();
    assert!(matches!(outcome, SingleOutcome::Staged { ref to, .. } if to == "a2.txt"));

    let report = commit(&view, &mut ledger, temp.path()).unwrap();

    assert_eq!(report.succeeded, 1);
    assert!(report.is_clean());
    assert!(ledger.is_empty());
    assert!(temp.path().join("a2.txt").exists());
    assert!(!temp.path().join("a.txt").exists());
}

#[test]
fn test_bulk_pattern_apply() {
    let temp = setup(&["cat.txt", "bat.txt", "dog.txt"], &[]);
    let view = list(&temp, &FilterSpec::new(), 1);
    let mut ledger = EditLedger::for_view(&view);

    let count = stage_pattern(&view, &mut ledger, &Pattern::new("a", "_", "x_", "")).unwrap();
    assert_eq!(count, 3);

    let report = commit(&view, &mut ledger, temp.path()).unwrap();
    assert_eq!(report.succeeded, 3);

    for name in ["x_c_t.txt", "x_b_t.txt", "x_dog.txt"] {
        assert!(temp.path().join(name).exists(), "{name} missing");
    }
}

#[test]
fn test_collision_is_reported_and_kept() {
    let temp = setup(&["a.txt", "b.txt"], &[]);
    let view = list(&temp, &FilterSpec::new(), 1);
    let mut ledger = EditLedger::for_view(&view);
    let row = view.position_of("a.txt").unwrap();

    stage_single(&view, &mut ledger, row, "b").unwrap();
    let report = commit(&view, &mut ledger, temp.path()).unwrap();

    assert_eq!(report.succeeded, 0);
    assert_eq!(report.failed(), 1);
    assert!(matches!(report.errors[0], RenameError::Collision { .. }));
    assert_eq!(ledger.get(row), Some("b.txt"));
    assert_eq!(fs::read(temp.path().join("b.txt")).unwrap(), b"b.txt");
    assert!(temp.path().join("a.txt").exists());
}

#[test]
fn test_partial_failure_keeps_only_failed() {
    let temp = setup(&["a.txt", "b.txt", "c.txt"], &[]);
    let view = list(&temp, &FilterSpec::new(), 1);
    let mut ledger = EditLedger::for_view(&view);
    let a = view.position_of("a.txt").unwrap();
    let b = view.position_of("b.txt").unwrap();

    ledger.stage(a, "c.txt");
    ledger.stage(b, "d.txt");

    let report = commit(&view, &mut ledger, temp.path()).unwrap();

    assert_eq!(report.succeeded, 1);
    assert_eq!(ledger.len(), 1);
    assert!(ledger.contains(a));
    assert!(report.summary().starts_with("Renamed 1 items, 1 errors"));
}

#[test]
fn test_failed_entries_carry_over_by_name() {
    let temp = setup(&["a.txt", "b.txt", "m.txt"], &[]);
    let old = list(&temp, &FilterSpec::new(), 1);
    let mut ledger = EditLedger::for_view(&old);
    ledger.stage(old.position_of("a.txt").unwrap(), "z.txt");
    ledger.stage(old.position_of("m.txt").unwrap(), "b.txt");

    let report = commit(&old, &mut ledger, temp.path()).unwrap();
    assert_eq!(report.succeeded, 1);

    let new = list(&temp, &FilterSpec::new(), 2);
    assert_eq!(ledger.carry_over(&old, &new), 1);

    let row = new.position_of("m.txt").unwrap();
    assert_eq!(ledger.get(row), Some("b.txt"));
}

#[test]
fn test_invalid_name_is_not_applied() {
    let temp = setup(&["a.txt"], &["sub"]);
    let view = list(&temp, &FilterSpec::new(), 1);
    let mut ledger = EditLedger::for_view(&view);
    let row = view.position_of("a.txt").unwrap();
    ledger.stage(row, "sub/a.txt");

    let report = commit(&view, &mut ledger, temp.path()).unwrap();

    assert!(matches!(report.errors[0], RenameError::InvalidName { .. }));
    assert!(!temp.path().join("sub").join("a.txt").exists());
    assert!(ledger.contains(row));
}

#[test]
fn test_vanished_source_is_rename_failure() {
    let temp = setup(&["a.txt"], &[]);
    let view = list(&temp, &FilterSpec::new(), 1);
    let mut ledger = EditLedger::for_view(&view);
    let row = view.position_of("a.txt").unwrap();
    ledger.stage(row, "b.txt");
    fs::remove_file(temp.path().join("a.txt")).unwrap();

    let report = commit(&view, &mut ledger, temp.path()).unwrap();

    assert!(matches!(report.errors[0], RenameError::Failed { .. }));
    assert!(ledger.contains(row));
}

#[test]
fn test_commit_rejects_stale_ledger() {
    let temp = setup(&["a.txt"], &[]);
    let old = list(&temp, &FilterSpec::new(), 1);
    let new = list(&temp, &FilterSpec::new(), 2);
    let mut ledger = EditLedger::for_view(&old);
    ledger.stage(1, "b.txt");

    assert!(commit(&new, &mut ledger, temp.path()).is_err());
    assert!(temp.path().join("a.txt").exists());
}

#[test]
fn test_bad_row_aborts_before_any_rename() {
    let temp = setup(&["a.txt", "b.txt"], &[]);
    let view = list(&temp, &FilterSpec::new(), 1);
    let mut ledger = EditLedger::for_view(&view);
    ledger.stage(1, "a2.txt");
    ledger.stage(9, "zzz");

    let err = commit(&view, &mut ledger, temp.path()).unwrap_err();

    assert_eq!(err, PlanError::RowOutOfRange { row: 9, len: 3 });
    assert!(temp.path().join("a.txt").exists());
    assert!(!temp.path().join("a2.txt").exists());
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_parent_row_aborts_before_any_rename() {
    let temp = setup(&["a.txt"], &[]);
    let view = list(&temp, &FilterSpec::new(), 1);
    let mut ledger = EditLedger::for_view(&view);
    ledger.stage(1, "a2.txt");
    ledger.stage(0, "up");

    let err = commit(&view, &mut ledger, temp.path()).unwrap_err();

    assert_eq!(err, PlanError::ParentEntry);
    assert!(temp.path().join("a.txt").exists());
}

#[test]
fn test_empty_report_summary() {
    let report = CommitReport::default();
    assert_eq!(report.summary(), "Renamed 0 items");
    assert!(report.error_messages().is_empty());
}
