//! SAE Web - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saeweb_site::config::SiteConfig;
use saeweb_site::runner::{run, RunnerDeps};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saeweb_site=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting SAE Web");

    #[cfg(not(target_arch = "wasm32"))]
    let config = SiteConfig::from_env();
    #[cfg(target_arch = "wasm32")]
    let config = SiteConfig::from_window();

    let platform = saeweb_site::infrastructure::platform::create_platform(config.viewport_width);

    run(RunnerDeps { platform, config });
}
