//! examseat-state — embedded classroom store.
//!
//! Backed by [redb](https://docs.rs/redb), provides persistent and in-memory
//! storage for the classroom registry.
//!
//! # Architecture
//!
//! Classrooms are JSON-serialized into redb's `&[u8]` value columns, keyed
//! by `roomId`. Each record carries an insertion sequence number so that
//! listings come back in the order rooms were added, independent of key
//! order.
//!
//! The `StateStore` is `Clone` + `Send` + `Sync` (backed by `Arc<Database>`)
//! and can be shared across async tasks. It implements
//! [`ClassroomRegistry`](examseat_registry::ClassroomRegistry).

pub mod error;
pub mod store;
pub mod tables;
pub mod types;

pub use error::{StateError, StateResult};
pub use store::StateStore;
pub use types::*;
