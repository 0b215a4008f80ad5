use crate::candidate::WordCandidate;
use crate::layout::generate_layout;
use crate::log::init_logger;
use crate::player;
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);
        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }
        // Create a JavaScript Error object with the formatted message
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize Lexicross logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

fn parse_candidates(candidates: JsValue) -> Result<Vec<WordCandidate>, WasmError> {
    serde_wasm_bindgen::from_value(candidates).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("candidates must be an array of {{clue, answer}} objects: {e}"),
        help: Some(
            "Pass e.g. [{clue: 'capital of France', answer: 'paris'}, ...]".to_string(),
        ),
    })
}

/// JS entry: (candidates: {clue: string, answer: string}[])
/// returns the layout `{rows, cols, result: [...]}` — the same shape the
/// original HTTP endpoint served.
#[wasm_bindgen]
pub fn generate_layout_wasm(candidates: JsValue) -> Result<JsValue, JsValue> {
    let candidates = parse_candidates(candidates)?;
    let layout = generate_layout(&candidates);
    to_value(&layout).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("failed to serialize layout: {e}"),
            help: None,
        }
        .into()
    })
}

/// JS entry: clue lists grouped by orientation, sorted by number, for the
/// clue panel. Takes the same candidates array as `generate_layout_wasm`.
#[wasm_bindgen]
pub fn clue_lists_wasm(candidates: JsValue) -> Result<JsValue, JsValue> {
    let candidates = parse_candidates(candidates)?;
    let layout = generate_layout(&candidates);
    to_value(&player::clue_lists(&layout)).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("failed to serialize clue lists: {e}"),
            help: None,
        }
        .into()
    })
}
