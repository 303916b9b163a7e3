use assert_fs::prelude::*;
use bib_relink::model::Entry;
use bib_relink::report::LinkFilesResult;
use bib_relink::resolver::relink_all;
use bib_relink::undo::RelinkCompound;

/// Whole-engine pass: one moved entry, one entry still in place, two search
/// roots with the moved file under the second.
#[test]
fn moved_entry_is_relinked_and_undo_round_trips() {
    let temp = assert_fs::TempDir::new().unwrap();
    let lib_old = temp.child("lib/old");
    let lib_new = temp.child("lib/new");
    lib_old.create_dir_all().unwrap();
    lib_new.child("a.pdf").write_str("pdf").unwrap();

    let in_place = temp.child("still/here.pdf");
    in_place.write_str("pdf").unwrap();

    let stale = temp.path().join("missing/a.pdf");
    let mut entries = vec![
        Entry::new("e1", Some(stale.display().to_string())),
        Entry::new("e2", Some(in_place.path().display().to_string())),
    ];
    let roots = [lib_old.path().to_path_buf(), lib_new.path().to_path_buf()];

    let outcomes = relink_all(&mut entries, &roots, || false, |_, _| {});

    let mut compound = RelinkCompound::new("Relink moved files");
    for (_, outcome) in &outcomes {
        if let bib_relink::RelinkOutcome::Relinked { change, .. } = outcome {
            compound.push(change.clone());
        }
    }

    let result = LinkFilesResult::reduce(outcomes);
    assert_eq!(result.changed, vec!["e1".to_string()]);
    assert!(result.file_exceptions.is_empty());
    assert_eq!(result.unchanged, 1);

    let expected = dunce::canonicalize(lib_new.path().join("a.pdf")).unwrap();
    assert_eq!(
        entries[0].file.as_deref(),
        Some(expected.display().to_string().as_str())
    );

    // One undoable edit, and reverting restores the stale reference.
    assert_eq!(compound.records().len(), 1);
    compound.revert(&mut entries);
    assert_eq!(entries[0].file.as_deref(), Some(stale.display().to_string().as_str()));
    assert!(entries[0].linked_files.is_empty());
}
