//! redb table definitions for the signal store.

use redb::TableDefinition;

/// Signal descriptors keyed by `{node_id}`, JSON-serialized.
pub const SIGNALS: TableDefinition<&str, &[u8]> = TableDefinition::new("signals");
