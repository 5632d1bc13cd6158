//! Entry store backed by one JSON file per entry under `.registry/entries/`
//!
//! Writers take the registry lock, so the revision check and the write are
//! atomic across processes sharing a registry.

use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::errors::{RegistryError, Result};
use crate::fs::{get_entries_dir, get_entry_path, read_json, write_json, RegistryLock};
use crate::schemas::{Entry, EntryId};

use super::{prepare_update, sort_newest_first, EntryFilter, EntryStore};

/// File-backed entry store rooted at a registry directory
#[derive(Debug, Clone)]
pub struct JsonEntryStore {
    root: PathBuf,
}

impl JsonEntryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonEntryStore { root: root.into() }
    }

    /// Ids of all stored entries, in ascending order
    fn stored_ids(&self) -> Result<Vec<EntryId>> {
        let dir = get_entries_dir(&self.root);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for dir_entry in fs::read_dir(&dir)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let id = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|n| *n > 0);
            match id {
                Some(n) => ids.push(EntryId(n)),
                None => debug!("Skipping unexpected file {}", path.display()),
            }
        }
        ids.sort();
        Ok(ids)
    }

    fn read_entry(&self, id: EntryId) -> Result<Entry> {
        read_json(&get_entry_path(&self.root, id)).map_err(|e| match e {
            RegistryError::FileNotFound(_) => RegistryError::NotFound(id.to_string()),
            other => other,
        })
    }
}

impl EntryStore for JsonEntryStore {
    fn create(&mut self, entry: Entry) -> Result<EntryId> {
        // Id allocation and the write happen under one lock
        let _lock = RegistryLock::acquire(&self.root)?;
        let next = self.stored_ids()?.last().map_or(1, |id| id.0 + 1);
        let id = EntryId(next);

        let mut stored = entry.with_id(id);
        stored.revision = 1;
        write_json(&get_entry_path(&self.root, id), &stored)?;

        info!(entry = %id, created_by = %stored.created_by, "Created entry");
        Ok(id)
    }

    fn update(&mut self, entry: &Entry) -> Result<()> {
        let _lock = RegistryLock::acquire(&self.root)?;
        let persisted = self.read_entry(entry.id)?;
        let next = prepare_update(&persisted, entry)?;
        write_json(&get_entry_path(&self.root, entry.id), &next)?;

        info!(entry = %entry.id, revision = next.revision, "Updated entry");
        Ok(())
    }

    fn get(&self, id: EntryId) -> Result<Entry> {
        debug!(entry = %id, "Reading entry");
        self.read_entry(id)
    }

    fn list(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut entries = self
            .stored_ids()?
            .into_iter()
            .map(|id| self.read_entry(id))
            .collect::<Result<Vec<_>>>()?;
        sort_newest_first(&mut entries);

        let result = filter.apply(entries);
        debug!(count = result.len(), "Listed entries");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::EntryDraft;
    use tempfile::TempDir;

    fn make_entry(building: &str) -> Entry {
        Entry::new(
            EntryDraft {
                building: building.to_string(),
                section: "Electrical".to_string(),
                mtr: "cable-5x2.5".to_string(),
                quantity: 10,
                responsible: "Petrov".to_string(),
                ..Default::default()
            },
            "alice",
        )
    }

    #[test]
    fn test_create_allocates_sequential_ids() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonEntryStore::new(temp.path());

        assert_eq!(store.create(make_entry("A1")).unwrap(), EntryId(1));
        assert_eq!(store.create(make_entry("A2")).unwrap(), EntryId(2));
        assert!(get_entry_path(temp.path(), EntryId(2)).exists());
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let store = JsonEntryStore::new(temp.path());

        let err = store.get(EntryId(9)).unwrap_err();
        assert!(matches!(err, RegistryError::NotFound(_)));
    }

    #[test]
    fn test_update_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonEntryStore::new(temp.path());
        let id = store.create(make_entry("A1")).unwrap();

        let mut entry = store.get(id).unwrap();
        assert_eq!(entry.revision, 1);
        entry.works = "laid cable".to_string();
        store.update(&entry).unwrap();

        let read_back = store.get(id).unwrap();
        assert_eq!(read_back.works, "laid cable");
        assert_eq!(read_back.revision, 2);
    }

    #[test]
    fn test_stale_update_conflicts() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonEntryStore::new(temp.path());
        let id = store.create(make_entry("A1")).unwrap();

        let first = store.get(id).unwrap();
        let second = store.get(id).unwrap();
        store.update(&first).unwrap();

        let err = store.update(&second).unwrap_err();
        assert!(matches!(err, RegistryError::Conflict(_)));
        assert_eq!(store.get(id).unwrap().revision, 2);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonEntryStore::new(temp.path());
        let entry = make_entry("A1").with_id(EntryId(5));

        assert!(matches!(store.update(&entry).unwrap_err(), RegistryError::NotFound(_)));
    }

    #[test]
    fn test_list_newest_first_with_filter() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonEntryStore::new(temp.path());
        store.create(make_entry("A1")).unwrap();
        store.create(make_entry("B2")).unwrap();
        store.create(make_entry("A3")).unwrap();

        let all = store.list(&EntryFilter::new()).unwrap();
        let buildings: Vec<_> = all.iter().map(|e| e.building.as_str()).collect();
        assert_eq!(buildings, vec!["A3", "B2", "A1"]);

        let filtered = store.list(&EntryFilter::new().with_query("b2")).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].building, "B2");
    }

    #[test]
    fn test_list_ignores_stray_files() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonEntryStore::new(temp.path());
        store.create(make_entry("A1")).unwrap();
        fs::write(get_entries_dir(temp.path()).join("notes.txt"), "x").unwrap();
        fs::write(get_entries_dir(temp.path()).join("draft.json"), "{}").unwrap();

        assert_eq!(store.list(&EntryFilter::new()).unwrap().len(), 1);
    }

    #[test]
    fn test_concurrent_creates_keep_every_entry() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let root = root.clone();
                std::thread::spawn(move || {
                    let mut store = JsonEntryStore::new(root);
                    (0..10)
                        .map(|n| store.create(make_entry(&format!("W{}-{}", worker, n))))
                        .collect::<Result<Vec<_>>>()
                })
            })
            .collect();

        let mut ids: Vec<EntryId> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap().unwrap())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 80);

        let store = JsonEntryStore::new(temp.path());
        assert_eq!(store.list(&EntryFilter::new()).unwrap().len(), 80);
    }

    #[test]
    fn test_concurrent_stale_updates_admit_one_writer() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonEntryStore::new(temp.path());
        let id = store.create(make_entry("A1")).unwrap();
        let snapshot = store.get(id).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let root = temp.path().to_path_buf();
                let mut candidate = snapshot.clone();
                candidate.works = format!("writer {}", worker);
                std::thread::spawn(move || JsonEntryStore::new(root).update(&candidate))
            })
            .collect();

        let results: Vec<Result<()>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, RegistryError::Conflict(_))));
        assert_eq!(store.get(id).unwrap().revision, 2);
    }
}
