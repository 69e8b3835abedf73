//! Native desktop runner for knob-viz development.
//!
//! Run with: cargo run --example native --features native
//! Pass a config file with: cargo run --example native --features native -- --config knob.json

use std::path::PathBuf;

use eframe::{run_native, NativeOptions};
use knob_core::{KnobConfig, KnobController};
use knob_viz::KnobApp;

fn main() -> eframe::Result<()> {
    // Initialize tracing for native development
    #[cfg(debug_assertions)]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(EnvFilter::from_default_env().add_directive("knob_core=debug".parse().unwrap()))
            .init();
    }

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Colors Knob - Native Development Runner");
                println!();
                println!("Usage: native [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --config, -c <PATH>  Load knob config (JSON)");
                println!("  --help, -h           Show this help message");
                println!();
                println!("Keyboard Shortcuts:");
                println!("  Space       Toggle the switch");
                println!("  R           Toggle angle/hue readout");
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    let controller = match config_path {
        Some(path) => {
            let loaded = std::fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| KnobConfig::from_json(&json).map_err(|e| e.to_string()))
                .and_then(|config| KnobController::with_config(config).map_err(|e| e.to_string()));
            match loaded {
                Ok(controller) => controller,
                Err(e) => {
                    eprintln!("Error: failed to load {}: {e}", path.display());
                    std::process::exit(1);
                }
            }
        }
        None => KnobController::new(),
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_title("Colors"),
        ..Default::default()
    };

    run_native(
        "Colors",
        options,
        Box::new(move |cc| Ok(Box::new(KnobApp::from_controller(cc, controller)))),
    )
}
