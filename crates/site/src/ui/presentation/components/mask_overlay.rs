//! Shape mask over the hero background
//!
//! Always in the tree so its target is registered before the gate opens;
//! hidden outside Starting/Revealing.

use dioxus::prelude::*;
use saeweb_domain::MASK_TARGET;

use crate::ui::presentation::state::use_intro_state;

const MASK_CLIP_ID: &str = "sae-mask-clip";

#[component]
pub fn MaskOverlay(background: &'static str) -> Element {
    let intro = use_intro_state();
    let view = *intro.view.read();

    let styles = intro.styles().clone();
    use_drop(move || styles.unregister(MASK_TARGET));

    let register = intro.styles().clone();
    let target_css = intro.styles().css_for(MASK_TARGET);
    let display = if view.show_mask { "flex" } else { "none" };

    rsx! {
        div {
            class: "fixed inset-0 z-[150] bg-black items-center justify-center overflow-hidden pointer-events-none",
            style: "display: {display};",
            div {
                id: MASK_TARGET,
                class: "w-full h-full",
                style: "{target_css} transform-origin: center;",
                onmounted: move |_| register.register(MASK_TARGET),
                svg {
                    width: "100%",
                    height: "100%",
                    view_box: "0 0 1000 600",
                    preserve_aspect_ratio: "xMidYMid slice",
                    defs {
                        clipPath {
                            id: MASK_CLIP_ID,
                            text {
                                x: "500",
                                y: "360",
                                text_anchor: "middle",
                                font_size: "260",
                                font_weight: "900",
                                font_family: "Impact, Arial Black, sans-serif",
                                "SAE"
                            }
                        }
                    }
                    image {
                        href: "{background}",
                        width: "1000",
                        height: "600",
                        preserve_aspect_ratio: "xMidYMid slice",
                        clip_path: "url(#{MASK_CLIP_ID})",
                    }
                }
            }
        }
    }
}
