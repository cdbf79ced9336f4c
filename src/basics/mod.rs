//! Single-concern labs: random payloads, method handling, layout views,
//! streamed bodies and repeated query parameters.

pub mod methods;
pub mod random;
pub mod stream;
pub mod uppercase;
pub mod view;
