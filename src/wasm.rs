//! WASM bindings for pedigree-layout.
//!
//! Exposes `computeLayout` and `validate` to JavaScript via wasm-bindgen.
//! Both take a snapshot as JSON and return JSON.

use wasm_bindgen::prelude::*;

use crate::config::LayoutConfig;
use crate::model::Snapshot;

fn decode(src: &str) -> Result<Snapshot, JsError> {
    Snapshot::from_json(src).map_err(|e| JsError::new(&e.to_string()))
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Lay out a snapshot with the default spacing.
#[wasm_bindgen(js_name = "computeLayout")]
pub fn compute_layout(src: &str) -> Result<String, JsError> {
    let snapshot = decode(src)?;
    encode(&crate::layout::compute_layout(
        &snapshot.persons,
        &snapshot.relations,
    ))
}

/// Lay out a snapshot with spacing from a `LayoutConfig` JSON object.
///
/// An empty `config` string means defaults.
#[wasm_bindgen(js_name = "computeLayoutWithConfig")]
pub fn compute_layout_with_config(src: &str, config: &str) -> Result<String, JsError> {
    let snapshot = decode(src)?;
    let config = if config.trim().is_empty() {
        LayoutConfig::default()
    } else {
        LayoutConfig::from_json(config).map_err(|e| JsError::new(&e.to_string()))?
    };
    encode(&crate::layout::compute_layout_with_config(
        &snapshot.persons,
        &snapshot.relations,
        &config,
    ))
}

/// Run the consistency checks and return the diagnostic list.
#[wasm_bindgen]
pub fn validate(src: &str) -> Result<String, JsError> {
    let snapshot = decode(src)?;
    encode(&crate::validate::validate(
        &snapshot.persons,
        &snapshot.relations,
    ))
}
