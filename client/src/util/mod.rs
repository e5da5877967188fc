//! Browser-facing helpers shared across pages.

pub mod embeds;
pub mod voice_widget;
