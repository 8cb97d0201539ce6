//! redb table definitions for the classroom store.

use redb::TableDefinition;

/// Classroom records keyed by `roomId`.
pub const CLASSROOMS: TableDefinition<&str, &[u8]> = TableDefinition::new("classrooms");

/// Store counters keyed by name.
pub const META: TableDefinition<&str, u64> = TableDefinition::new("meta");

/// Next insertion sequence number in [`META`].
pub const NEXT_SEQ_KEY: &str = "next_seq";
