//! Mental-health page data: therapist listing and voice companion state.

#[cfg(test)]
#[path = "support_test.rs"]
mod support_test;

use crate::util::voice_widget::VoiceWidgetError;

pub const BOOKING_NOTICE: &str = "Payment flow coming soon";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Therapist {
    pub name: &'static str,
    pub specialty: &'static str,
    /// Hourly rate in rupees.
    pub price_inr: u32,
    pub availability: &'static str,
}

impl Therapist {
    pub fn price_label(&self) -> String {
        format!("₹{}/hour", self.price_inr)
    }
}

pub const THERAPISTS: &[Therapist] = &[
    Therapist {
        name: "Dr. A. Sharma",
        specialty: "Anxiety & Stress",
        price_inr: 400,
        availability: "Today 6–9 PM",
    },
    Therapist {
        name: "Dr. R. Mehta",
        specialty: "Depression & Burnout",
        price_inr: 500,
        availability: "Tomorrow 4–8 PM",
    },
];

/// Lowest listed rate, for the card headline.
pub fn starting_price() -> Option<u32> {
    THERAPISTS.iter().map(|t| t.price_inr).min()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VoiceCompanionState {
    pub listening: bool,
    pub notice: Option<&'static str>,
}

impl VoiceCompanionState {
    /// The button flips to listening on every press, even if the widget fails to start.
    pub fn start(&mut self, outcome: Result<(), VoiceWidgetError>) {
        self.listening = true;
        self.notice = outcome.err().map(VoiceWidgetError::message);
    }

    pub fn button_label(&self) -> &'static str {
        if self.listening { "🎙️ Listening…" } else { "🎧 Talk to AI Now" }
    }
}
