//! WASM-compatible egui host for the Colors knob.
//!
//! This crate renders the switch, the knob and the background, and feeds
//! pointer input to a [`knob_core::KnobController`]. It can run:
//! - Natively (via eframe)
//! - In the browser (via WASM)

mod app;
mod gesture;
mod host;
mod settings;
mod ui;

pub use app::KnobApp;
pub use gesture::{PointerGesture, PointerPhase};
pub use host::{to_color32, HostView};
pub use settings::ViewSettings;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Start the knob app in WASM context.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    // Better panic messages in the browser console
    console_error_panic_hook::set_once();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let started = eframe::WebRunner::new()
            .start(
                "colors-knob-canvas",
                web_options,
                Box::new(|cc| Ok(Box::new(KnobApp::new(cc)))),
            )
            .await;

        if let Err(e) = started {
            web_sys::console::error_1(&format!("Failed to start eframe: {e:?}").into());
        }
    });
}
