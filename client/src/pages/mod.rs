//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and network calls and delegates
//! rendering details to `components`.

pub mod home;
pub mod mental_health;
pub mod risk;
pub mod xray;
