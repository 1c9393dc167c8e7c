use std::collections::HashSet;
use std::sync::Arc;

use types::{Teacher, TeacherDraft, TeacherId};

use crate::seed;

/// The authoritative list of teachers for the session.
///
/// Cloning is cheap and yields an independent snapshot: mutations go through
/// [`Arc::make_mut`], so a clone held elsewhere never observes a change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Arc<Vec<Teacher>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store populated with the built-in sample staff.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for draft in seed::sample_teachers() {
            store.add(draft);
        }
        tracing::info!(count = store.len(), "seeded record store");
        store
    }

    /// Build a store from existing records, keeping the first record for any
    /// repeated id.
    pub fn from_records(records: impl IntoIterator<Item = Teacher>) -> Self {
        let mut seen = HashSet::new();
        let records = records
            .into_iter()
            .filter(|teacher| {
                let fresh = seen.insert(teacher.id);
                if !fresh {
                    tracing::warn!(id = %teacher.id, "dropping teacher with duplicate id");
                }
                fresh
            })
            .collect();

        Self {
            records: Arc::new(records),
        }
    }

    pub fn records(&self) -> &[Teacher] {
        &self.records
    }

    pub fn snapshot(&self) -> Arc<Vec<Teacher>> {
        Arc::clone(&self.records)
    }

    pub fn get(&self, id: TeacherId) -> Option<&Teacher> {
        self.records.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TeacherId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a new teacher under a freshly minted id.
    pub fn add(&mut self, draft: TeacherDraft) -> Teacher {
        let mut id = TeacherId::new();
        while self.contains(id) {
            id = TeacherId::new();
        }

        let teacher = Teacher::from_draft(id, draft);
        tracing::info!(id = %teacher.id, name = %teacher.name, "added teacher");
        Arc::make_mut(&mut self.records).push(teacher.clone());
        teacher
    }

    /// Replace the fields of the teacher with `id`, keeping its position.
    ///
    /// Returns `false` and leaves the store untouched when no teacher matches.
    pub fn update(&mut self, id: TeacherId, draft: TeacherDraft) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "update ignored: no such teacher");
            return false;
        };

        let updated = Teacher::from_draft(id, draft);
        if self.records[index] != updated {
            Arc::make_mut(&mut self.records)[index] = updated;
            tracing::info!(%id, "updated teacher");
        }
        true
    }

    /// Remove the teacher with `id`, if present.
    pub fn remove(&mut self, id: TeacherId) -> Option<Teacher> {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "remove ignored: no such teacher");
            return None;
        };

        let removed = Arc::make_mut(&mut self.records).remove(index);
        tracing::info!(%id, name = %removed.name, "removed teacher");
        Some(removed)
    }

    fn position(&self, id: TeacherId) -> Option<usize> {
        self.records.iter().position(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> TeacherDraft {
        TeacherDraft {
            name: name.into(),
            email: format!("{}@school.edu", name.to_lowercase()),
            department: "Science".into(),
            subjects: vec!["Physics".into()],
            ..Default::default()
        }
    }

    #[test]
    fn add_assigns_distinct_ids_and_appends() {
        let mut store = RecordStore::new();
        let a = store.add(draft("A"));
        let b = store.add(draft("B"));

        assert_ne!(a.id, b.id);
        assert_eq!(store.records(), [a.clone(), b.clone()]);

        store.remove(a.id);
        assert_eq!(store.records(), [b]);
    }

    #[test]
    fn update_keeps_id_and_position() {
        let mut store = RecordStore::new();
        let a = store.add(draft("A"));
        let b = store.add(draft("B"));

        let mut changed = a.to_draft();
        changed.experience = 12;
        assert!(store.update(a.id, changed));

        assert_eq!(store.records()[0].id, a.id);
        assert_eq!(store.records()[0].experience, 12);
        assert_eq!(store.records()[1], b);
    }

    #[test]
    fn update_is_idempotent() {
        let mut store = RecordStore::new();
        let a = store.add(draft("A"));
        let mut changed = a.to_draft();
        changed.name = "Alice".into();

        store.update(a.id, changed.clone());
        let once = store.clone();
        store.update(a.id, changed);
        assert_eq!(store, once);
    }

    #[test]
    fn misses_are_silent_no_ops() {
        let mut store = RecordStore::new();
        store.add(draft("A"));
        let before = store.clone();

        let stranger = TeacherId::new();
        assert!(!store.update(stranger, draft("X")));
        assert!(store.remove(stranger).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn snapshots_do_not_see_later_mutations() {
        let mut store = RecordStore::new();
        store.add(draft("A"));
        let snapshot = store.snapshot();

        store.add(draft("B"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn from_records_drops_duplicate_ids() {
        let first = Teacher::from_draft(TeacherId::new(), draft("A"));
        let mut dup = first.clone();
        dup.name = "Impostor".into();

        let store = RecordStore::from_records([first.clone(), dup]);
        assert_eq!(store.records(), [first]);
    }

    #[test]
    fn seeded_store_is_populated_with_unique_ids() {
        let store = RecordStore::seeded();
        assert!(!store.is_empty());
        let ids: HashSet<_> = store.records().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), store.len());
    }
}
