//! In-memory record store.
//!
//! # Record Lifecycle
//! ```text
//! absent ──create──▶ present ──delete──▶ absent
//!                      │  ▲
//!                      └──┘ update
//! ```
//!
//! # Design Decisions
//! - Explicit object built at startup and shared through `AppState`
//! - Every operation returns `Result`; there is one calling convention
//! - Ids are decimal strings; `next_id` is one past the largest numeric id
//! - Nothing is persisted; records live as long as the process

pub mod records;

pub use records::{RecordStore, StoreError, StoreResult};
