//! Forward and mount proxy labs.
//!
//! # Data Flow
//! ```text
//! GET /?url=<absolute-url>               ANY /<path>?<query>
//!     → target.rs (validate url, 400)        → upstream base + path
//!     └──────────────┬───────────────────────┘
//!                    ▼
//!            relay.rs (hyper client, deadline)
//!                    ▼
//!     upstream status + headers + body, streamed back unchanged
//! ```
//!
//! # Design Decisions
//! - Validation always precedes any outbound request
//! - Redirects are relayed, never followed
//! - Bodies stream through without buffering

pub mod handlers;
pub mod relay;
pub mod target;

pub use handlers::{forward_url, mount};
pub use relay::Forwarder;
