//! Boats CRUD lab.
//!
//! # Data Flow
//! ```text
//! POST /boat {"data": {...}}
//!     → schema.rs (ValidatedJson: shape check, unknown fields stripped)
//!     → handlers.rs (next_id + create)
//!     → 201 {"id": "<id>"}
//!
//! GET/PUT/DELETE /boat/{id}
//!     → handlers.rs → store (read/update/delete)
//!     → 200 / 204, or 404
//! ```

pub mod handlers;
pub mod schema;

pub use handlers::{create_boat, delete_boat, read_boat, update_boat};
pub use schema::{Boat, BoatEnvelope, ValidatedJson};

use crate::store::RecordStore;

/// Store seeded with the two boats every fresh boats lab starts with.
pub fn seeded_store() -> RecordStore<Boat> {
    RecordStore::with_records([
        ("1".to_string(), Boat::new("Chaparral", "red")),
        ("2".to_string(), Boat::new("Chaparral", "blue")),
    ])
}
