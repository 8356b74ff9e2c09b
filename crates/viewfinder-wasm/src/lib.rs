//! Viewfinder WASM - WebAssembly bindings for Viewfinder
//!
//! This crate exposes the viewfinder-core preview geometry to JavaScript and
//! TypeScript camera pipelines.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types (sizes, transforms)
//! - `select` - Effective rotation and capture size selection
//! - `transform` - Preview surface and overlay transforms
//! - `plan` - Preview configuration and one-call planning
//! - `logging` - Console output for diagnostic logs
//!
//! # Usage
//!
//! ```typescript
//! import init, { effective_rotation, select_optimal_size, compute_preview_transform } from '@viewfinder/wasm';
//!
//! await init();
//!
//! const rotation = effective_rotation(false, sensorOrientation, displayRotation);
//! const size = select_optimal_size(supportedSizes, rotation, view.width, view.height);
//! const matrix = compute_preview_transform(
//!   rotation, size.width, size.height, view.width, view.height, 2, false,
//! );
//! ```

use wasm_bindgen::prelude::*;

mod logging;
mod plan;
mod select;
mod transform;
mod types;

// Re-export public types
pub use logging::enable_logging;
pub use plan::{plan_preview, JsPreviewPlan, PreviewConfig};
pub use select::{effective_rotation, select_optimal_size};
pub use transform::{
    compute_preview_transform, compute_preview_transform_via_inverse, map_overlay_point,
};
pub use types::{JsAffineTransform, JsSize};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Logging stays off until the host calls `enable_logging`
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
