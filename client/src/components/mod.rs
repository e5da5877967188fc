//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and result panels. Pages own the state
//! signals and pass them down as props.

pub mod assessment_panel;
pub mod backend_badge;
pub mod feature_card;
pub mod question_field;
pub mod risk_summary;
pub mod site_header;
pub mod therapist_card;
pub mod voice_companion_card;
