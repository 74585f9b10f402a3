//! Bounded, persisted history of finished calculations.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::assets;
use crate::calculator::Computation;
use crate::error::{StoreError, TableError};
use crate::responses::TableResource;
use crate::store::KeyValueStore;

/// Store key holding the JSON-encoded history list.
pub const HISTORY_KEY: &str = "calculatorHistory";

/// Entries kept before the oldest is evicted.
pub const MAX_ENTRIES: usize = 10;

/// One recorded calculation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Creation time in milliseconds since the epoch, unique within a list.
    pub id: i64,
    /// `"<prev> <op> <current> = <result>"`.
    pub calculation: String,
    /// ISO-8601 creation time.
    pub timestamp: String,
}

/// A history entry paired with the line shown beside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryItem {
    pub calculation: String,
    pub description: String,
}

/// Newest-first list of at most [`MAX_ENTRIES`] calculations.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Load the list from the store. Missing or corrupt data yields an empty list.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let Some(raw) = store.get(HISTORY_KEY) else {
            return Self::default();
        };

        match serde_json::from_str::<Vec<HistoryEntry>>(&raw) {
            Ok(mut entries) => {
                entries.truncate(MAX_ENTRIES);
                Self { entries }
            }
            Err(e) => {
                warn!("Discarding unreadable history: {e}");
                Self::default()
            }
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a calculation at the front, trim to the bound, and persist.
    ///
    /// The in-memory list is updated even if the write fails.
    pub fn record(
        &mut self,
        computation: &Computation,
        store: &mut dyn KeyValueStore,
    ) -> Result<&HistoryEntry, StoreError> {
        let now = Utc::now();
        let mut id = now.timestamp_millis();
        if let Some(newest) = self.entries.first() {
            id = id.max(newest.id.saturating_add(1));
        }

        self.entries.insert(
            0,
            HistoryEntry {
                id,
                calculation: computation.expression(),
                timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        );
        self.entries.truncate(MAX_ENTRIES);

        self.save(store)?;
        Ok(&self.entries[0])
    }

    /// Remove every entry and persist the empty list.
    pub fn clear(&mut self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        self.entries.clear();
        self.save(store)
    }

    fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.entries)?;
        store.set(HISTORY_KEY, encoded)
    }

    /// Entries paired with descriptions, cycling through `descriptions`.
    pub fn items(&self, descriptions: &[String]) -> Vec<HistoryItem> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| HistoryItem {
                calculation: entry.calculation.clone(),
                description: if descriptions.is_empty() {
                    String::new()
                } else {
                    descriptions[i % descriptions.len()].clone()
                },
            })
            .collect()
    }
}

/// Description lines from `resource`, or the embedded ones if it can't be
/// read or holds no lines.
pub fn load_descriptions(resource: &dyn TableResource) -> Vec<String> {
    match resource.fetch() {
        Ok(text) => {
            let descriptions = parse_descriptions(&text);
            if !descriptions.is_empty() {
                debug!(
                    source = %resource.describe(),
                    count = descriptions.len(),
                    "Loaded history descriptions"
                );
                return descriptions;
            }
            warn!(
                "No history descriptions in {}, using defaults",
                resource.describe()
            );
        }
        Err(TableError::NotConfigured) => {}
        Err(e) => warn!("{e}; using default history descriptions"),
    }

    default_descriptions()
}

/// Description lines from the embedded history resource.
pub fn default_descriptions() -> Vec<String> {
    match assets::text(assets::HISTORY_LINES) {
        Ok(text) => parse_descriptions(&text),
        Err(e) => {
            warn!("{e}");
            Vec::new()
        }
    }
}

fn parse_descriptions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::Operator;
    use crate::responses::FileResource;
    use crate::store::MemoryStore;

    fn add(n: u32) -> Computation {
        Computation::run(&n.to_string(), Operator::Add, "1")
    }

    #[test]
    fn test_record_newest_first() {
        let mut store = MemoryStore::new();
        let mut history = History::default();
        history.record(&add(1), &mut store).unwrap();
        history.record(&add(2), &mut store).unwrap();

        assert_eq!(history.entries()[0].calculation, "2 + 1 = 3");
        assert_eq!(history.entries()[1].calculation, "1 + 1 = 2");
        assert!(history.entries()[0].id > history.entries()[1].id);
    }

    #[test]
    fn test_bounded_to_ten() {
        let mut store = MemoryStore::new();
        let mut history = History::default();
        for n in 0..11 {
            history.record(&add(n), &mut store).unwrap();
        }

        assert_eq!(history.len(), MAX_ENTRIES);
        assert_eq!(history.entries()[0].calculation, "10 + 1 = 11");
        assert_eq!(history.entries()[9].calculation, "1 + 1 = 2");
    }

    #[test]
    fn test_persisted_and_reloaded() {
        let mut store = MemoryStore::new();
        let mut history = History::default();
        history.record(&add(4), &mut store).unwrap();

        let reloaded = History::load(&store);
        assert_eq!(reloaded.entries(), history.entries());
        assert!(reloaded.entries()[0].timestamp.ends_with('Z'));
    }

    #[test]
    fn test_corrupt_history_ignored() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "[{oops".to_string()).unwrap();
        assert!(History::load(&store).is_empty());
    }

    #[test]
    fn test_clear() {
        let mut store = MemoryStore::new();
        let mut history = History::default();
        history.record(&add(4), &mut store).unwrap();
        history.clear(&mut store).unwrap();
        assert!(History::load(&store).is_empty());
    }

    #[test]
    fn test_items_cycle_descriptions() {
        let mut store = MemoryStore::new();
        let mut history = History::default();
        for n in 0..3 {
            history.record(&add(n), &mut store).unwrap();
        }

        let descriptions = vec!["first".to_string(), "second".to_string()];
        let items = history.items(&descriptions);
        let shown: Vec<&str> = items.iter().map(|i| i.description.as_str()).collect();
        assert_eq!(shown, vec!["first", "second", "first"]);
        assert_eq!(default_descriptions().len(), 10);
    }

    #[test]
    fn test_next_id_saturates() {
        let mut store = MemoryStore::new();
        store
            .set(
                HISTORY_KEY,
                format!(
                    r#"[{{"id":{},"calculation":"1 + 1 = 2","timestamp":"x"}}]"#,
                    i64::MAX
                ),
            )
            .unwrap();

        let mut history = History::load(&store);
        let entry = history.record(&add(2), &mut store).unwrap();
        assert_eq!(entry.id, i64::MAX);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_descriptions_from_resource() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history_lines.txt");
        std::fs::write(&path, "one\n\n  two  \n").unwrap();

        let loaded = load_descriptions(&FileResource::new(Some(path)));
        assert_eq!(loaded, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_descriptions_fall_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let missing = FileResource::new(Some(dir.path().join("missing.txt")));
        assert_eq!(load_descriptions(&missing), default_descriptions());
        assert_eq!(load_descriptions(&FileResource::new(None)), default_descriptions());
        assert_eq!(load_descriptions(&"\n  \n"), default_descriptions());
    }
}
