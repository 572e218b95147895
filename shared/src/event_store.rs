//! # Event Store
//!
//! Durable persistence of the event collection. The whole collection lives
//! under a single key as a JSON array and is rewritten on every mutation;
//! there are no partial writes and no schema versioning.
//!
//! The mutation helpers are pure: they take the current collection and
//! return the complete new one, which callers then hand to
//! [`EventStore::save`].

use crate::error::StoreError;
use crate::models::Event;
use log::{debug, warn};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Trait defining the interface for the client-side key-value record
///
/// Implemented by the browser's local storage in the frontend and by
/// [`MemoryStorage`] elsewhere.
pub trait KeyValueStorage {
    /// Read the raw value stored under `key`
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process storage; clones share the same underlying map
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Event collection persisted under one storage key
#[derive(Debug, Clone)]
pub struct EventStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> EventStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the stored collection
    ///
    /// A missing record yields an empty collection. Unreadable or malformed
    /// data is logged and also treated as empty.
    pub fn load(&self) -> Vec<Event> {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read stored events under {:?}: {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Event>>(&raw) {
            Ok(events) => {
                debug!("Loaded {} events from storage", events.len());
                events
            }
            Err(e) => {
                warn!("Discarding malformed stored events under {:?}: {}", self.key, e);
                Vec::new()
            }
        }
    }

    /// Serialize the full collection and overwrite the stored record
    pub fn save(&self, events: &[Event]) -> Result<(), StoreError> {
        let json = serde_json::to_string(events)?;
        self.storage.write(&self.key, &json)?;
        debug!("Saved {} events to storage", events.len());
        Ok(())
    }
}

fn check_time_range(event: &Event) -> Result<(), StoreError> {
    if event.has_valid_time_range() {
        Ok(())
    } else {
        Err(StoreError::InvalidTimeRange {
            start: event.start_time.clone(),
            end: event.end_time.clone(),
        })
    }
}

/// Append a new event, preserving insertion order
pub fn add(events: &[Event], new_event: Event) -> Result<Vec<Event>, StoreError> {
    check_time_range(&new_event)?;
    let mut updated = events.to_vec();
    updated.push(new_event);
    Ok(updated)
}

/// Replace every event with the same id
///
/// This is a lenient upsert: when no event carries the id, the record is
/// appended instead of being rejected.
pub fn update(events: &[Event], updated_event: Event) -> Result<Vec<Event>, StoreError> {
    check_time_range(&updated_event)?;
    let mut replaced = false;
    let mut updated: Vec<Event> = events
        .iter()
        .map(|event| {
            if event.id == updated_event.id {
                replaced = true;
                updated_event.clone()
            } else {
                event.clone()
            }
        })
        .collect();

    if !replaced {
        debug!("No event with id {} to update, appending", updated_event.id);
        updated.push(updated_event);
    }
    Ok(updated)
}

/// Drop the event with the given id; absent ids are a no-op
pub fn remove(events: &[Event], id: &str) -> Vec<Event> {
    events.iter().filter(|event| event.id != id).cloned().collect()
}

/// Move the event with the given id to another date, leaving every other
/// field untouched
pub fn relocate(events: &[Event], id: &str, new_date: &str) -> Vec<Event> {
    events
        .iter()
        .map(|event| {
            if event.id == id {
                Event {
                    date: new_date.to_string(),
                    ..event.clone()
                }
            } else {
                event.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use proptest::prelude::*;

    fn create_test_event(id: &str, date: &str, name: &str) -> Event {
        Event {
            id: id.to_string(),
            date: date.to_string(),
            name: name.to_string(),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            description: format!("{} notes", name),
            category: Category::Work,
        }
    }

    fn sample_events() -> Vec<Event> {
        vec![
            create_test_event("1", "01-03-2024", "Standup"),
            create_test_event("2", "15-03-2024", "Dentist"),
            create_test_event("3", "02-04-2024", "Review"),
        ]
    }

    struct FailingStorage;

    impl KeyValueStorage for FailingStorage {
        fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Storage("unavailable".to_string()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_load_missing_record_is_empty() {
        let store = EventStore::new(MemoryStorage::new(), "events");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips_in_order() {
        let store = EventStore::new(MemoryStorage::new(), "events");
        let events = sample_events();

        store.save(&events).unwrap();
        assert_eq!(store.load(), events);
    }

    #[test]
    fn test_save_overwrites_entire_record() {
        let store = EventStore::new(MemoryStorage::new(), "events");
        store.save(&sample_events()).unwrap();

        let fewer = vec![create_test_event("9", "05-05-2024", "Only")];
        store.save(&fewer).unwrap();
        assert_eq!(store.load(), fewer);
    }

    #[test]
    fn test_load_malformed_record_is_empty() {
        let storage = MemoryStorage::new();
        storage.write("events", "{not json").unwrap();

        let store = EventStore::new(storage, "events");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_storage_failure_is_empty() {
        let store = EventStore::new(FailingStorage, "events");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_storage_failure_is_reported() {
        let store = EventStore::new(FailingStorage, "events");
        let result = store.save(&sample_events());
        assert!(matches!(result, Err(StoreError::Storage(_))));
    }

    #[test]
    fn test_stores_with_different_keys_are_independent() {
        let storage = MemoryStorage::new();
        let personal = EventStore::new(storage.clone(), "personal");
        let team = EventStore::new(storage, "team");

        personal.save(&sample_events()).unwrap();
        assert!(team.load().is_empty());
        assert_eq!(personal.load().len(), 3);
    }

    #[test]
    fn test_add_appends_to_end() {
        let events = sample_events();
        let new_event = create_test_event("4", "03-03-2024", "Lunch");

        let updated = add(&events, new_event.clone()).unwrap();
        assert_eq!(updated.len(), 4);
        assert_eq!(updated[..3], events[..]);
        assert_eq!(updated[3], new_event);
    }

    #[test]
    fn test_add_rejects_inverted_time_range() {
        let mut new_event = create_test_event("4", "03-03-2024", "Lunch");
        new_event.start_time = "10:00".to_string();
        new_event.end_time = "09:00".to_string();

        let result = add(&sample_events(), new_event);
        assert!(matches!(result, Err(StoreError::InvalidTimeRange { .. })));
    }

    #[test]
    fn test_add_rejects_equal_times() {
        let mut new_event = create_test_event("4", "03-03-2024", "Lunch");
        new_event.end_time = new_event.start_time.clone();
        assert!(add(&[], new_event).is_err());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let events = sample_events();
        let mut changed = events[1].clone();
        changed.name = "Orthodontist".to_string();

        let updated = update(&events, changed.clone()).unwrap();
        assert_eq!(updated.len(), 3);
        assert_eq!(updated[1], changed);
        assert_eq!(updated[0], events[0]);
        assert_eq!(updated[2], events[2]);
    }

    #[test]
    fn test_add_rejects_missing_or_malformed_times() {
        let mut no_start = create_test_event("4", "03-03-2024", "Dentist");
        no_start.start_time = String::new();
        assert!(matches!(add(&[], no_start), Err(StoreError::InvalidTimeRange { .. })));

        let mut garbage = create_test_event("5", "03-03-2024", "Dentist");
        garbage.start_time = "ab".to_string();
        garbage.end_time = "zz".to_string();
        assert!(add(&[], garbage).is_err());
    }

    #[test]
    fn test_update_replaces_every_duplicate_id() {
        let mut events = sample_events();
        events.push(create_test_event("2", "16-03-2024", "Dentist follow-up"));
        let mut changed = events[1].clone();
        changed.name = "Orthodontist".to_string();

        let updated = update(&events, changed.clone()).unwrap();
        assert_eq!(updated.len(), 4);
        assert_eq!(updated[1], changed);
        assert_eq!(updated[3], changed);
        assert_eq!(updated[0], events[0]);
    }

    #[test]
    fn test_update_unknown_id_appends() {
        let events = sample_events();
        let stranger = create_test_event("42", "10-03-2024", "Walk-in");

        let updated = update(&events, stranger.clone()).unwrap();
        assert_eq!(updated.len(), 4);
        assert_eq!(updated.last(), Some(&stranger));
    }

    #[test]
    fn test_update_rejects_inverted_time_range() {
        let mut changed = sample_events()[0].clone();
        changed.start_time = "18:00".to_string();
        assert!(update(&sample_events(), changed).is_err());
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let events = sample_events();
        assert_eq!(remove(&events, "missing"), events);
    }

    #[test]
    fn test_relocate_changes_only_date() {
        let events = sample_events();
        let moved = relocate(&events, "2", "20-03-2024");

        assert_eq!(moved.len(), events.len());
        assert_eq!(moved[0], events[0]);
        assert_eq!(moved[2], events[2]);
        assert_eq!(moved[1].date, "20-03-2024");
        assert_eq!(
            Event {
                date: events[1].date.clone(),
                ..moved[1].clone()
            },
            events[1]
        );
    }

    #[test]
    fn test_relocate_absent_id_is_noop() {
        let events = sample_events();
        assert_eq!(relocate(&events, "missing", "20-03-2024"), events);
    }

    proptest! {
        #[test]
        fn prop_add_then_remove_is_identity(names in proptest::collection::vec("[a-zA-Z ]{1,12}", 0..8)) {
            let events: Vec<Event> = names
                .iter()
                .enumerate()
                .map(|(i, name)| create_test_event(&i.to_string(), "01-01-2024", name))
                .collect();
            let extra = create_test_event("new", "02-01-2024", "Extra");

            let added = add(&events, extra).unwrap();
            prop_assert_eq!(remove(&added, "new"), events);
        }

        #[test]
        fn prop_save_load_round_trip(names in proptest::collection::vec(".{0,16}", 0..6)) {
            let store = EventStore::new(MemoryStorage::new(), "events");
            let events: Vec<Event> = names
                .iter()
                .enumerate()
                .map(|(i, name)| create_test_event(&i.to_string(), "01-01-2024", name))
                .collect();

            store.save(&events).unwrap();
            prop_assert_eq!(store.load(), events);
        }
    }
}
