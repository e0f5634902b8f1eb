use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::models::profile::{EntryId, ProfileDocument, Section};

/// Issues clock-millisecond entry ids, strictly increasing per generator even
/// when several are requested within the same millisecond or the wall clock
/// steps backwards.
#[derive(Debug, Default)]
pub struct EntryIdGenerator {
    last: AtomicI64,
}

impl EntryIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the generator above every id already present in a document, so
    /// ids issued after a reload cannot collide with stored ones.
    pub fn starting_after(max_existing: EntryId) -> Self {
        Self {
            last: AtomicI64::new(max_existing),
        }
    }

    /// Generator for editing `doc`: seeded past its largest stored id.
    pub fn for_document(doc: &ProfileDocument) -> Self {
        let max_existing = Section::ALL
            .iter()
            .flat_map(|s| doc.section_ids(*s))
            .max()
            .unwrap_or(0);
        Self::starting_after(max_existing)
    }

    pub fn next_id(&self) -> EntryId {
        let now = Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now.max(prev.saturating_add(1))
    }
}

/// Gives a fresh id to every entry that has none (stored without an `id`,
/// which loads as 0) or repeats an id seen earlier in the same list.
/// Entries that already carry a unique id keep it.
pub fn with_unique_ids(mut doc: ProfileDocument) -> ProfileDocument {
    let ids = EntryIdGenerator::for_document(&doc);
    for section in Section::ALL {
        let mut seen = HashSet::new();
        for id in doc.section_ids_mut(section) {
            if *id == 0 || !seen.insert(*id) {
                *id = ids.next_id();
                seen.insert(*id);
            }
        }
    }
    doc
}
