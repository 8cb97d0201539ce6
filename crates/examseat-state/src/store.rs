//! StateStore — redb-backed classroom persistence.
//!
//! Provides typed operations over classroom records. Values are
//! JSON-serialized into redb's `&[u8]` value columns. The store supports
//! both on-disk and in-memory backends (the latter for testing).

use std::path::Path;
use std::sync::Arc;

use examseat_core::Classroom;
use examseat_registry::{ClassroomRegistry, RegistryError, RegistryResult};
use redb::{Database, ReadableDatabase, ReadableTable, ReadableTableMetadata};
use tracing::debug;

use crate::error::{StateError, StateResult};
use crate::tables::*;
use crate::types::*;

/// Convert any `Display` error into a `StateError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StateError::$variant(e.to_string())
    };
}

/// Thread-safe classroom store backed by redb.
#[derive(Clone)]
pub struct StateStore {
    db: Arc<Database>,
}

impl StateStore {
    /// Open (or create) a persistent store at the given path.
    pub fn open(path: &Path) -> StateResult<Self> {
        let db = Database::create(path).map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!(?path, "state store opened");
        Ok(store)
    }

    /// Create an ephemeral in-memory store (for testing).
    pub fn open_in_memory() -> StateResult<Self> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!("in-memory state store opened");
        Ok(store)
    }

    /// Create all tables if they don't exist yet.
    fn ensure_tables(&self) -> StateResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        txn.open_table(CLASSROOMS).map_err(map_err!(Table))?;
        txn.open_table(META).map_err(map_err!(Table))?;
        txn.commit().map_err(map_err!(Transaction))?;
        Ok(())
    }

    /// Insert a classroom unless its room id is already taken.
    ///
    /// The existence check and the insert share one write transaction.
    /// Returns `false` (and writes nothing) on a duplicate.
    pub fn insert_classroom(&self, classroom: &Classroom) -> StateResult<bool> {
        let key = classroom.room_id();
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        {
            let mut table = txn.open_table(CLASSROOMS).map_err(map_err!(Table))?;
            if table.get(key).map_err(map_err!(Read))?.is_some() {
                drop(table);
                txn.abort().map_err(map_err!(Transaction))?;
                debug!(%key, "duplicate room id rejected");
                return Ok(false);
            }

            let mut meta = txn.open_table(META).map_err(map_err!(Table))?;
            let seq = meta
                .get(NEXT_SEQ_KEY)
                .map_err(map_err!(Read))?
                .map(|g| g.value())
                .unwrap_or(0);
            meta.insert(NEXT_SEQ_KEY, seq + 1).map_err(map_err!(Write))?;

            let record = ClassroomRecord {
                seq,
                classroom: classroom.clone(),
            };
            let value = serde_json::to_vec(&record).map_err(map_err!(Serialize))?;
            table
                .insert(key, value.as_slice())
                .map_err(map_err!(Write))?;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(%key, "classroom stored");
        Ok(true)
    }

    /// Get a classroom by room id.
    pub fn get_classroom(&self, room_id: &str) -> StateResult<Option<Classroom>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(CLASSROOMS).map_err(map_err!(Table))?;
        match table.get(room_id).map_err(map_err!(Read))? {
            Some(guard) => {
                let record: ClassroomRecord =
                    serde_json::from_slice(guard.value()).map_err(map_err!(Deserialize))?;
                Ok(Some(record.classroom))
            }
            None => Ok(None),
        }
    }

    /// List all classrooms in insertion order, read in a single transaction.
    pub fn list_classrooms(&self) -> StateResult<Vec<Classroom>> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(CLASSROOMS).map_err(map_err!(Table))?;
        let mut records = Vec::new();
        for entry in table.iter().map_err(map_err!(Read))? {
            let (_, value) = entry.map_err(map_err!(Read))?;
            let record: ClassroomRecord =
                serde_json::from_slice(value.value()).map_err(map_err!(Deserialize))?;
            records.push(record);
        }
        records.sort_by_key(|r| r.seq);
        Ok(records.into_iter().map(|r| r.classroom).collect())
    }

    /// Delete a classroom by room id. Returns true if it existed.
    pub fn delete_classroom(&self, room_id: &str) -> StateResult<bool> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        let existed;
        {
            let mut table = txn.open_table(CLASSROOMS).map_err(map_err!(Table))?;
            existed = table.remove(room_id).map_err(map_err!(Write))?.is_some();
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(%room_id, existed, "classroom deleted");
        Ok(existed)
    }

    /// Number of stored classrooms.
    pub fn count_classrooms(&self) -> StateResult<u64> {
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(CLASSROOMS).map_err(map_err!(Table))?;
        table.len().map_err(map_err!(Read))
    }
}

impl ClassroomRegistry for StateStore {
    fn add(&mut self, classroom: Classroom) -> RegistryResult<()> {
        if self.insert_classroom(&classroom)? {
            Ok(())
        } else {
            Err(RegistryError::DuplicateRoomId(classroom.room_id().to_string()))
        }
    }

    fn remove(&mut self, room_id: &str) -> RegistryResult<()> {
        if self.delete_classroom(room_id)? {
            Ok(())
        } else {
            Err(RegistryError::NotFound(room_id.to_string()))
        }
    }

    fn list(&self) -> RegistryResult<Vec<Classroom>> {
        Ok(self.list_classrooms()?)
    }
}
