use std::sync::Arc;

use crate::config::SiteConfig;
use crate::ports::outbound::PlatformPort;
use crate::state::Platform;

pub struct RunnerDeps {
    pub platform: Platform,
    pub config: SiteConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { platform, config } = deps;

    // Wrap Platform in Arc<dyn PlatformPort> for UI layer abstraction
    let platform_port: Arc<dyn PlatformPort> = Arc::new(platform);

    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let css = match load_site_css() {
            Ok(css) => css,
            Err(e) => {
                tracing::warn!(error = %e, "Starting without site stylesheet");
                String::new()
            }
        };
        let head = format!("<style>{}</style>", css);
        let cfg = dioxus_desktop::Config::new().with_custom_head(head);
        builder = builder.with_cfg(cfg);
    }

    tracing::info!(
        shell = ?config.shell,
        audio_src = %config.audio.src,
        viewport_width = config.viewport_width,
        "Launching site"
    );

    builder
        .with_context(platform_port)
        .with_context(config.shell)
        .with_context(config.audio)
        .launch(crate::ui::app);
}

#[cfg(not(target_arch = "wasm32"))]
fn load_site_css() -> anyhow::Result<String> {
    use anyhow::Context;

    let css_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/css/site.css");
    std::fs::read_to_string(&css_path)
        .with_context(|| format!("reading {}", css_path.display()))
}
