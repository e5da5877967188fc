//! Starting a call on the embedded voice companion.
//!
//! The vendor element renders its own start button inside a shadow root.
//! The element may not exist yet (script still loading) or may not have
//! attached its shadow root, so each step reports its own failure.

#[cfg(test)]
#[path = "voice_widget_test.rs"]
mod voice_widget_test;

/// Why the voice call could not be started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoiceWidgetError {
    /// No widget element in the document.
    NotLoaded,
    /// The element exists but has no shadow root yet.
    NotReady,
    /// The shadow root has no button to press.
    NoStartButton,
}

impl VoiceWidgetError {
    pub fn message(self) -> &'static str {
        match self {
            Self::NotLoaded => "Voice assistant is still loading. Please try again.",
            Self::NotReady => "Voice assistant not ready yet.",
            Self::NoStartButton => "Unable to start call. Please use the widget button.",
        }
    }
}

/// Press the start button inside the voice widget's shadow root.
#[cfg(feature = "hydrate")]
pub fn start_call() -> Result<(), VoiceWidgetError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window().and_then(|w| w.document()).ok_or(VoiceWidgetError::NotLoaded)?;
    let widget = document
        .query_selector(super::embeds::VOICE_ELEMENT)
        .ok()
        .flatten()
        .ok_or(VoiceWidgetError::NotLoaded)?;
    let shadow = widget.shadow_root().ok_or(VoiceWidgetError::NotReady)?;
    let button = shadow
        .query_selector("button")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or(VoiceWidgetError::NoStartButton)?;
    button.click();
    Ok(())
}

/// Server render has no widget to start.
#[cfg(not(feature = "hydrate"))]
pub fn start_call() -> Result<(), VoiceWidgetError> {
    Err(VoiceWidgetError::NotLoaded)
}
