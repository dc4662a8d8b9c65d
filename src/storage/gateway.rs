//! Persistence gateway
//!
//! Loads the movement list through a fallback chain and writes it back on
//! every mutation:
//!
//! 1. the durable store (returned verbatim, no reseeding; records without the
//!    movement shape are set aside and written back unchanged)
//! 2. the seed resource (persisted into the store once read)
//! 3. the built-in demo movements (persisted as well)
//!
//! Loading never fails and saving never propagates an error: failures are
//! logged and the in-memory list stays the source of truth for the session.

use std::cell::RefCell;

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{FinordenError, FinordenResult};
use crate::models::Movement;

use super::demo::default_movements;
use super::seed::SeedSource;
use super::store::KeyValueStore;

/// Key under which the movement list is stored
pub const STORAGE_KEY: &str = "finorden_movimientos";

/// Which tier of the load chain produced the data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Store,
    Seed,
    Defaults,
}

impl LoadSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Store => "saved data",
            Self::Seed => "seed resource",
            Self::Defaults => "built-in demo data",
        }
    }
}

/// Result of running the load chain
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub movements: Vec<Movement>,
    pub source: LoadSource,
}

type Attempt<'a> = Box<dyn Fn() -> FinordenResult<Option<Vec<Movement>>> + 'a>;

/// Loads and saves the movement list
pub struct PersistenceGateway {
    store: Box<dyn KeyValueStore>,
    seed: Box<dyn SeedSource>,
    /// Stored records that are not movements, kept so saving never drops them
    set_aside: RefCell<Vec<Value>>,
}

impl PersistenceGateway {
    pub fn new(store: Box<dyn KeyValueStore>, seed: Box<dyn SeedSource>) -> Self {
        Self {
            store,
            seed,
            set_aside: RefCell::new(Vec::new()),
        }
    }

    /// Number of stored records that could not be read as movements
    pub fn set_aside_count(&self) -> usize {
        self.set_aside.borrow().len()
    }

    /// Run the load chain; the first tier that yields movements wins
    pub fn load(&self, today: NaiveDate) -> LoadOutcome {
        let attempts: [(LoadSource, Attempt<'_>); 2] = [
            (LoadSource::Store, Box::new(|| self.read_stored())),
            (LoadSource::Seed, Box::new(|| self.fetch_seed())),
        ];

        for (source, attempt) in attempts {
            match attempt() {
                Ok(Some(movements)) => {
                    tracing::info!(
                        count = movements.len(),
                        "Loaded movements from {}",
                        source.label()
                    );
                    if source != LoadSource::Store {
                        self.save(&movements);
                    }
                    return LoadOutcome { movements, source };
                }
                Ok(None) => {
                    tracing::debug!("No movements available from {}", source.label());
                }
                Err(e) => {
                    tracing::warn!("Could not load movements from {}: {}", source.label(), e);
                }
            }
        }

        let movements = default_movements(today);
        tracing::info!("Using {}", LoadSource::Defaults.label());
        self.save(&movements);
        LoadOutcome {
            movements,
            source: LoadSource::Defaults,
        }
    }

    /// Persist the full list, logging instead of failing
    ///
    /// Returns whether the data reached the store.
    pub fn save(&self, movements: &[Movement]) -> bool {
        match self.try_save(movements) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Could not save movements: {}", e);
                false
            }
        }
    }

    /// Persist the full list, overwriting the stored entry
    ///
    /// Records set aside at load time are appended unchanged.
    pub fn try_save(&self, movements: &[Movement]) -> FinordenResult<()> {
        let mut records = movements
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        records.extend(self.set_aside.borrow().iter().cloned());

        let json = serde_json::to_string(&records)?;
        self.store.set(STORAGE_KEY, &json)
    }

    /// Delete the stored list; the next load starts from the seed again
    pub fn clear(&self) -> FinordenResult<()> {
        self.store.remove(STORAGE_KEY)?;
        self.set_aside.borrow_mut().clear();
        tracing::info!("Cleared stored movements");
        Ok(())
    }

    /// Any stored JSON array wins; odd records inside it are set aside
    fn read_stored(&self) -> FinordenResult<Option<Vec<Movement>>> {
        let raw = match self.store.get(STORAGE_KEY)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(None),
        };

        let mut movements = Vec::new();
        let mut set_aside = Vec::new();
        for (index, record) in parse_json_array(&raw)?.into_iter().enumerate() {
            match Movement::deserialize(&record) {
                Ok(movement) => movements.push(movement),
                Err(e) => {
                    tracing::warn!(
                        index,
                        "Stored record is not a movement, keeping it as is: {}",
                        e
                    );
                    set_aside.push(record);
                }
            }
        }

        *self.set_aside.borrow_mut() = set_aside;
        Ok(Some(movements))
    }

    fn fetch_seed(&self) -> FinordenResult<Option<Vec<Movement>>> {
        tracing::debug!("Fetching seed from {}", self.seed.describe());
        let body = self.seed.fetch()?;
        let records = parse_json_array(&body)?;
        Ok(Some(serde_json::from_value(Value::Array(records))?))
    }
}

/// Parse text that must hold a JSON array
fn parse_json_array(raw: &str) -> FinordenResult<Vec<Value>> {
    match serde_json::from_str(raw)? {
        Value::Array(records) => Ok(records),
        _ => Err(FinordenError::Storage("Movements are not a JSON array".into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::store::{FileStore, MemoryStore};
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::Arc;
    use tempfile::TempDir;

    const ONE: &str = r#"[{"id":1,"type":"income","amount":100,"date":"2024-01-01","category":"sales","description":""}]"#;
    const TWO: &str = r#"[{"id":2,"type":"expense","amount":50.25,"date":"2024-01-02","category":"food","description":"lunch"}]"#;

    /// Seed that counts fetches and returns a canned result
    struct StubSeed {
        body: Option<&'static str>,
        calls: Rc<Cell<usize>>,
    }

    impl SeedSource for StubSeed {
        fn fetch(&self) -> FinordenResult<String> {
            self.calls.set(self.calls.get() + 1);
            self.body
                .map(str::to_string)
                .ok_or_else(|| FinordenError::Seed("404".into()))
        }

        fn describe(&self) -> String {
            "stub".into()
        }
    }

    /// Store whose writes always fail, like a full quota
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _key: &str) -> FinordenResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> FinordenResult<()> {
            Err(FinordenError::Storage("quota exceeded".into()))
        }

        fn remove(&self, _key: &str) -> FinordenResult<()> {
            Ok(())
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
    }

    fn gateway(
        store: Arc<MemoryStore>,
        body: Option<&'static str>,
    ) -> (PersistenceGateway, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let seed = StubSeed {
            body,
            calls: Rc::clone(&calls),
        };
        (PersistenceGateway::new(Box::new(store), Box::new(seed)), calls)
    }

    #[test]
    fn test_store_wins_without_fetching() {
        let store = Arc::new(MemoryStore::with_entry(STORAGE_KEY, ONE));
        let (gateway, calls) = gateway(Arc::clone(&store), Some(TWO));

        let outcome = gateway.load(today());

        assert_eq!(outcome.source, LoadSource::Store);
        assert_eq!(outcome.movements.len(), 1);
        assert_eq!(outcome.movements[0].id, 1);
        assert_eq!(calls.get(), 0);
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some(ONE));
    }

    #[test]
    fn test_empty_array_in_store_is_kept() {
        let store = Arc::new(MemoryStore::with_entry(STORAGE_KEY, "[]"));
        let (gateway, calls) = gateway(store, Some(TWO));

        let outcome = gateway.load(today());

        assert_eq!(outcome.source, LoadSource::Store);
        assert!(outcome.movements.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_seed_populates_empty_store() {
        let store = Arc::new(MemoryStore::new());
        let (gateway, calls) = gateway(Arc::clone(&store), Some(TWO));

        let outcome = gateway.load(today());

        assert_eq!(outcome.source, LoadSource::Seed);
        assert_eq!(outcome.movements[0].id, 2);
        assert_eq!(calls.get(), 1);

        let stored: Vec<Movement> =
            serde_json::from_str(&store.get(STORAGE_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(stored, outcome.movements);
    }

    #[test]
    fn test_failed_seed_falls_back_to_defaults() {
        let store = Arc::new(MemoryStore::new());
        let (gateway, _) = gateway(Arc::clone(&store), None);

        let outcome = gateway.load(today());

        assert_eq!(outcome.source, LoadSource::Defaults);
        let dates: Vec<_> = outcome.movements.iter().map(|m| m.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-05-07", "2024-05-08", "2024-05-09"]);
        assert!(store.get(STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_odd_stored_record_does_not_trigger_reseed() {
        let stored = r#"[{"id":1,"type":"income","amount":100,"date":"2024-01-01","category":"sales","description":""},{"id":2,"type":"income","amount":"5","date":"2024-01-02"},{"id":3,"type":"transfer","amount":1}]"#;
        let store = Arc::new(MemoryStore::with_entry(STORAGE_KEY, stored));
        let (gateway, calls) = gateway(Arc::clone(&store), Some(TWO));

        let outcome = gateway.load(today());

        assert_eq!(outcome.source, LoadSource::Store);
        assert_eq!(outcome.movements.len(), 1);
        assert_eq!(outcome.movements[0].id, 1);
        assert_eq!(gateway.set_aside_count(), 2);
        assert_eq!(calls.get(), 0);
        assert_eq!(store.get(STORAGE_KEY).unwrap().as_deref(), Some(stored));
    }

    #[test]
    fn test_saving_keeps_set_aside_records() {
        let stored = r#"[{"id":1,"type":"income","amount":100,"date":"2024-01-01"},{"id":2,"type":"income","amount":"5","date":"2024-01-02"}]"#;
        let store = Arc::new(MemoryStore::with_entry(STORAGE_KEY, stored));
        let (gateway, _) = gateway(Arc::clone(&store), None);

        let mut movements = gateway.load(today()).movements;
        movements.push(Movement::new(
            7,
            crate::models::MovementType::Expense,
            crate::models::Money::from_cents(250),
            "2024-05-09",
        ));
        assert!(gateway.save(&movements));

        let records: Vec<Value> =
            serde_json::from_str(&store.get(STORAGE_KEY).unwrap().unwrap()).unwrap();
        let ids: Vec<i64> = records.iter().filter_map(|r| r["id"].as_i64()).collect();
        assert_eq!(ids, vec![1, 7, 2]);
        assert_eq!(records[2]["amount"], "5");
    }

    #[test]
    fn test_corrupt_store_falls_through_to_seed() {
        let store = Arc::new(MemoryStore::with_entry(STORAGE_KEY, "{not json"));
        let (gateway, _) = gateway(Arc::clone(&store), Some(TWO));

        let outcome = gateway.load(today());

        assert_eq!(outcome.source, LoadSource::Seed);
    }

    #[test]
    fn test_non_array_store_falls_through() {
        let store = Arc::new(MemoryStore::with_entry(STORAGE_KEY, r#"{"id":1}"#));
        let (gateway, _) = gateway(store, None);

        assert_eq!(gateway.load(today()).source, LoadSource::Defaults);
    }

    #[test]
    fn test_malformed_seed_falls_back_to_defaults() {
        let store = Arc::new(MemoryStore::new());
        let (gateway, _) = gateway(store, Some("<html>not found</html>"));

        assert_eq!(gateway.load(today()).source, LoadSource::Defaults);
    }

    #[test]
    fn test_save_failure_is_swallowed() {
        let calls = Rc::new(Cell::new(0));
        let gateway = PersistenceGateway::new(
            Box::new(FullStore),
            Box::new(StubSeed {
                body: None,
                calls,
            }),
        );

        let outcome = gateway.load(today());
        assert_eq!(outcome.source, LoadSource::Defaults);
        assert!(!gateway.save(&outcome.movements));
        assert!(gateway.try_save(&outcome.movements).is_err());
    }

    #[test]
    fn test_clear_then_reload_reseeds() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());
        let calls = Rc::new(Cell::new(0));
        let gateway = PersistenceGateway::new(
            Box::new(store.clone()),
            Box::new(StubSeed {
                body: Some(TWO),
                calls: Rc::clone(&calls),
            }),
        );

        assert_eq!(gateway.load(today()).source, LoadSource::Seed);
        assert_eq!(gateway.load(today()).source, LoadSource::Store);

        gateway.clear().unwrap();
        assert!(!store.path_for(STORAGE_KEY).exists());
        assert_eq!(gateway.load(today()).source, LoadSource::Seed);
        assert_eq!(calls.get(), 2);
    }
}
