//! `<audio>` element adapter for [`PlaybackSource`].
//!
//! Works on both renderers: the element is driven through
//! `dioxus::document::eval`, which runs in the page on web and inside the
//! webview on desktop.

use dioxus::document;
use futures_util::future::LocalBoxFuture;
use saeweb_domain::PlayOutcome;

use crate::ports::outbound::PlaybackSource;

/// DOM id of the hero soundtrack element
pub const HERO_AUDIO_ID: &str = "sae-hero-audio";

const STARTED: &str = "started";
const BLOCKED: &str = "blocked";

/// Drives one `<audio>` element by id.
#[derive(Debug, Clone)]
pub struct DomAudioPlayback {
    element_id: String,
}

impl DomAudioPlayback {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
        }
    }

    fn play_script(&self) -> String {
        format!(
            r#"
            const el = document.getElementById({id:?});
            if (!el) {{ return "unsupported"; }}
            try {{
                await el.play();
                return "{STARTED}";
            }} catch (e) {{
                return (e && e.name === "NotAllowedError") ? "{BLOCKED}" : "unsupported";
            }}
            "#,
            id = self.element_id,
        )
    }

    fn set_property(&self, property: &str, value: &str) {
        let script = format!(
            "const el = document.getElementById({id:?}); if (el) {{ el.{property} = {value}; }}",
            id = self.element_id,
        );
        let _ = document::eval(&script);
    }
}

impl Default for DomAudioPlayback {
    fn default() -> Self {
        Self::new(HERO_AUDIO_ID)
    }
}

/// Map the script's answer onto a [`PlayOutcome`].
pub(crate) fn classify(answer: &str) -> PlayOutcome {
    match answer {
        STARTED => PlayOutcome::Started,
        BLOCKED => PlayOutcome::Blocked,
        _ => PlayOutcome::Unsupported,
    }
}

impl PlaybackSource for DomAudioPlayback {
    fn attempt_play(&self) -> LocalBoxFuture<'static, PlayOutcome> {
        let script = self.play_script();
        Box::pin(async move {
            match document::eval(&script).join::<String>().await {
                Ok(answer) => classify(&answer),
                Err(e) => {
                    tracing::warn!(error = ?e, "Play script failed to run");
                    PlayOutcome::Unsupported
                }
            }
        })
    }

    fn set_muted(&self, muted: bool) {
        self.set_property("muted", if muted { "true" } else { "false" });
    }

    fn set_volume(&self, volume: f64) {
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            saeweb_domain::DEFAULT_VOLUME
        };
        self.set_property("volume", &volume.to_string());
    }

    fn pause(&self) {
        let script = format!(
            "const el = document.getElementById({id:?}); if (el) {{ el.pause(); }}",
            id = self.element_id,
        );
        let _ = document::eval(&script);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_map_to_outcomes() {
        assert_eq!(classify("started"), PlayOutcome::Started);
        assert_eq!(classify("blocked"), PlayOutcome::Blocked);
        assert_eq!(classify("unsupported"), PlayOutcome::Unsupported);
        assert_eq!(classify(""), PlayOutcome::Unsupported);
    }

    #[test]
    fn play_script_targets_the_element_and_tells_policy_apart() {
        let script = DomAudioPlayback::new("intro-audio").play_script();
        assert!(script.contains(r#"getElementById("intro-audio")"#));
        assert!(script.contains("NotAllowedError"));
        assert!(script.contains("return \"started\""));
    }
}
