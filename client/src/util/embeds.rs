//! Third-party chat and voice widgets embedded in the pages.
//!
//! Both widgets are custom elements loaded from a vendor script in the
//! document head; the UI only places the element and, for the voice widget,
//! presses its start button.

#[cfg(test)]
#[path = "embeds_test.rs"]
mod embeds_test;

/// Script that registers the `<df-messenger>` chat element.
pub const CHAT_BOOTSTRAP_SRC: &str = "https://www.gstatic.com/dialogflow-console/fast/messenger/bootstrap.js?v=1";

/// Script that registers the `<elevenlabs-convai>` voice element.
pub const VOICE_WIDGET_SRC: &str = "https://unpkg.com/@elevenlabs/convai-widget-embed";

pub const CHAT_ELEMENT: &str = "df-messenger";
pub const VOICE_ELEMENT: &str = "elevenlabs-convai";

const CHAT_AGENT_ID: &str = "22591bdc-f998-476e-81c4-af92f6f54692";
const CHAT_TITLE: &str = "arogyai";

/// Voice agent id baked in at build time from `AAROGYA_VOICE_AGENT_ID`.
pub fn voice_agent_id() -> Option<&'static str> {
    option_env!("AAROGYA_VOICE_AGENT_ID").filter(|id| !id.trim().is_empty())
}

/// Markup for the chat widget anchored at the bottom of the home page.
pub fn chat_widget_markup() -> String {
    format!(
        r#"<{CHAT_ELEMENT} intent="WELCOME" chat-title="{CHAT_TITLE}" agent-id="{CHAT_AGENT_ID}" language-code="en"></{CHAT_ELEMENT}>"#
    )
}

/// Markup for the voice widget, or `None` when no agent is configured.
pub fn voice_widget_markup(agent_id: Option<&str>) -> Option<String> {
    let agent_id = agent_id.map(str::trim).filter(|id| !id.is_empty())?;
    if !agent_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return None;
    }
    Some(format!(r#"<{VOICE_ELEMENT} agent-id="{agent_id}"></{VOICE_ELEMENT}>"#))
}
