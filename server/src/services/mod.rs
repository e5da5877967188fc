//! Service layer between routes and the prediction backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` owns the HTTP contract with the external model service;
//! `prediction` turns raw model output into the reports the UI shows.

pub mod backend;
pub mod prediction;
