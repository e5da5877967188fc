//! Networking: same-origin REST calls to the Aarogya server.

pub mod api;
