//! Page state kept as plain structs inside `RwSignal`s.
//!
//! DESIGN
//! ======
//! Transitions live here as ordinary methods so page components stay thin
//! and the rules (what clears what, when a button is enabled) are testable
//! without a browser.

pub mod quiz;
pub mod support;
pub mod xray;
