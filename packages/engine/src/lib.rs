//! FallingPixels Engine - falling-sand cellular automaton in WASM
//!
//! Architecture:
//! - domain/      - element definitions and the material catalog
//! - spatial/     - SoA cell grid and the band/strip partition
//! - systems/     - heat diffusion, rules, gravity behaviors
//! - simulation/  - WorldCore tick orchestration + wasm facade
//! - persistence/ - binary grid snapshots

pub mod domain;
pub mod logging;
pub mod persistence;
pub mod simulation;
pub mod spatial;
pub mod systems;

use wasm_bindgen::prelude::*;

use domain::builtin;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_logging();
    log::info!("FallingPixels engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::content::ContentRegistry;
pub use domain::elements::{ElementDefinition, ElementId, ElementType, Rule};
pub use persistence::SnapshotError;
pub use simulation::{PerfStats, SimConfig, World, WorldCore};

// Export element constants for JS
#[wasm_bindgen]
pub fn el_empty() -> u16 { domain::elements::EL_EMPTY }
#[wasm_bindgen]
pub fn el_any() -> u16 { domain::elements::EL_ANY }
#[wasm_bindgen]
pub fn el_stone() -> u16 { builtin::EL_STONE }
#[wasm_bindgen]
pub fn el_sand() -> u16 { builtin::EL_SAND }
#[wasm_bindgen]
pub fn el_water() -> u16 { builtin::EL_WATER }
#[wasm_bindgen]
pub fn el_ice() -> u16 { builtin::EL_ICE }
#[wasm_bindgen]
pub fn el_steam() -> u16 { builtin::EL_STEAM }
#[wasm_bindgen]
pub fn el_lava() -> u16 { builtin::EL_LAVA }
#[wasm_bindgen]
pub fn el_wood() -> u16 { builtin::EL_WOOD }
#[wasm_bindgen]
pub fn el_fire() -> u16 { builtin::EL_FIRE }
#[wasm_bindgen]
pub fn el_smoke() -> u16 { builtin::EL_SMOKE }
#[wasm_bindgen]
pub fn el_ash() -> u16 { builtin::EL_ASH }
#[wasm_bindgen]
pub fn el_acid() -> u16 { builtin::EL_ACID }
#[wasm_bindgen]
pub fn el_oil() -> u16 { builtin::EL_OIL }
#[wasm_bindgen]
pub fn el_glass() -> u16 { builtin::EL_GLASS }
