//! UI components

mod audio_toggle;
mod error_prompt;
mod floating_nav;
mod hero;
mod hero_text;
mod home_button;
mod hud;
mod info_overlay;
mod loading_screen;
mod mask_overlay;
mod mini_map;
mod start_screen;

pub use audio_toggle::AudioToggle;
pub use error_prompt::ErrorPrompt;
pub use floating_nav::FloatingNav;
pub use hero::Hero;
pub use hero_text::HeroText;
pub use home_button::HomeButton;
pub use hud::Hud;
pub use info_overlay::{InfoButton, InfoOverlay};
pub use loading_screen::{LoadingGate, LoadingScreen};
pub use mask_overlay::MaskOverlay;
pub use mini_map::MiniMap;
pub use start_screen::StartScreen;
