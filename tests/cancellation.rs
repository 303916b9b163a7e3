use assert_fs::prelude::*;
use bib_relink::model::Entry;
use bib_relink::resolver::relink_all;

/// Cancellation is honored between entries: work already done stays done,
/// remaining entries are left untouched and produce no outcome.
#[test]
fn cancel_between_entries_keeps_partial_results() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("files/one.pdf").touch().unwrap();
    temp.child("files/two.pdf").touch().unwrap();

    let mut entries = vec![
        Entry::new("one", Some(temp.path().join("old/one.pdf").display().to_string())),
        Entry::new("two", Some(temp.path().join("old/two.pdf").display().to_string())),
    ];

    let processed = std::cell::Cell::new(0usize);
    let outcomes = relink_all(
        &mut entries,
        &[temp.path().to_path_buf()],
        // Cancel once the first entry has been handled.
        || processed.get() >= 1,
        |_, _| processed.set(processed.get() + 1),
    );

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].1.is_relinked());

    // First entry keeps its relink; second is untouched.
    assert_eq!(entries[0].linked_files.len(), 1);
    assert!(entries[1].linked_files.is_empty());
    assert_eq!(
        entries[1].file.as_deref(),
        Some(temp.path().join("old/two.pdf").display().to_string().as_str())
    );
}
