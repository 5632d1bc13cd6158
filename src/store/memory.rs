//! In-memory entry store

use std::collections::BTreeMap;

use crate::errors::{RegistryError, Result};
use crate::schemas::{Entry, EntryId};

use super::{prepare_update, sort_newest_first, EntryFilter, EntryStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryEntryStore {
    entries: BTreeMap<EntryId, Entry>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryStore for MemoryEntryStore {
    fn create(&mut self, entry: Entry) -> Result<EntryId> {
        let next = self.entries.keys().next_back().map_or(1, |id| id.0 + 1);
        let id = EntryId(next);
        let mut stored = entry.with_id(id);
        stored.revision = 1;
        self.entries.insert(id, stored);
        Ok(id)
    }

    fn update(&mut self, entry: &Entry) -> Result<()> {
        let persisted = self
            .entries
            .get(&entry.id)
            .ok_or_else(|| RegistryError::NotFound(entry.id.to_string()))?;
        let next = prepare_update(persisted, entry)?;
        self.entries.insert(entry.id, next);
        Ok(())
    }

    fn get(&self, id: EntryId) -> Result<Entry> {
        self.entries
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    fn list(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut entries: Vec<Entry> = self.entries.values().cloned().collect();
        sort_newest_first(&mut entries);
        Ok(filter.apply(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::EntryDraft;

    fn make_entry() -> Entry {
        Entry::new(
            EntryDraft {
                building: "A1".to_string(),
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
    fn test_create_get_update() {
        let mut store = MemoryEntryStore::new();
        assert!(store.is_empty());

        let id = store.create(make_entry()).unwrap();
        assert_eq!(id, EntryId(1));
        assert_eq!(store.len(), 1);

        let mut entry = store.get(id).unwrap();
        entry.quantity = 20;
        store.update(&entry).unwrap();
        assert_eq!(store.get(id).unwrap().quantity, 20);
        assert_eq!(store.get(id).unwrap().revision, 2);
    }

    #[test]
    fn test_missing_entry() {
        let mut store = MemoryEntryStore::new();
        assert!(matches!(store.get(EntryId(1)).unwrap_err(), RegistryError::NotFound(_)));
        let entry = make_entry().with_id(EntryId(1));
        assert!(matches!(store.update(&entry).unwrap_err(), RegistryError::NotFound(_)));
    }
}
