//! WASM bindings for restables
//!
//! This module provides JavaScript-accessible functions for grid table ↔
//! list table conversion.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "wasm")]
use crate::{ConversionResult, ConvertOptions, Notation};

/// Conversion options (exposed to WASM)
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize, Default)]
pub struct WasmConvertOptions {
    /// Output notation: "grid", "list" or "auto"
    #[serde(default)]
    pub target: Option<String>,
    /// Widen grid columns to fit their content
    #[serde(default)]
    pub fit_widths: bool,
}

#[cfg(feature = "wasm")]
impl WasmConvertOptions {
    fn to_options(&self) -> ConvertOptions {
        let target = match self.target.as_deref() {
            Some("grid") => Some(Notation::Grid),
            Some("list") | Some("list-table") => Some(Notation::ListTable),
            _ => None,
        };
        ConvertOptions {
            target,
            keep_notation: false,
            fit_widths: self.fit_widths,
        }
    }
}

/// Conversion result with additional metadata
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
    /// Warnings during conversion
    pub warnings: Vec<String>,
}

#[cfg(feature = "wasm")]
impl ConvertResult {
    fn from_output(result: ConversionResult<crate::ConversionOutput>) -> Self {
        match result {
            Ok(out) => ConvertResult {
                warnings: out.warnings.iter().map(|w| w.to_string()).collect(),
                output: out.content,
                success: true,
                error: None,
            },
            Err(e) => ConvertResult {
                output: String::new(),
                success: false,
                error: Some(e.to_string()),
                warnings: vec![],
            },
        }
    }
}

#[cfg(feature = "wasm")]
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(JsValue::from)
}

/// Initialize panic hook for better error messages in browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert a grid table to a list table
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "gridToListTable")]
pub fn grid_to_list_table_wasm(input: &str) -> Result<String, JsValue> {
    crate::grid_to_list_table(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a list table to a grid table
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "listTableToGrid")]
pub fn list_table_to_grid_wasm(input: &str) -> Result<String, JsValue> {
    crate::list_table_to_grid(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a table with options
///
/// Returns `{ output, success, error, warnings }`.
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "convertTable")]
pub fn convert_table_wasm(input: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let opts: WasmConvertOptions = serde_wasm_bindgen::from_value(options).unwrap_or_default();
    let result = ConvertResult::from_output(crate::convert_table(input, &opts.to_options()));
    to_js(&result)
}

/// Detect input notation ("grid", "list-table" or "unknown")
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "detectNotation")]
pub fn detect_notation_wasm(input: &str) -> String {
    crate::detect_notation(input)
        .map(|n| n.name())
        .unwrap_or("unknown")
        .to_string()
}

/// Decode a table and return its model as a JS object
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "parseTable")]
pub fn parse_table_wasm(input: &str) -> Result<JsValue, JsValue> {
    let (table, _) = crate::decode_table(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_js(&table)
}

/// Get version information
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "getVersion")]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check a grid table for potential issues
#[cfg(feature = "wasm")]
#[wasm_bindgen(js_name = "checkGrid")]
pub fn check_grid_wasm(input: &str) -> Result<JsValue, JsValue> {
    use crate::diagnostics::DiagnosticLevel;

    let result = crate::diagnostics::check_grid(input);

    // Group diagnostics by level
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for d in &result.diagnostics {
        let text = match d.line {
            Some(line) => format!("line {}: {}", line, d.message),
            None => d.message.clone(),
        };
        match d.level {
            DiagnosticLevel::Error => errors.push(text),
            DiagnosticLevel::Warning => warnings.push(text),
            DiagnosticLevel::Info => infos.push(text),
        }
    }

    let summary = CheckSummary {
        errors,
        warnings,
        infos,
        has_errors: result.has_errors(),
    };
    to_js(&summary)
}

/// Summary of grid check results
#[cfg(feature = "wasm")]
#[derive(Serialize, Deserialize)]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
    pub has_errors: bool,
}
