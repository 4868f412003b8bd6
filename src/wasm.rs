// WebAssembly bindings for the box API
use crate::pudelko::{self, Pudelko};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct PudelkoWasm {
    lenient: bool,
}

impl Default for PudelkoWasm {
    fn default() -> Self {
        Self::new()
    }
}

impl PudelkoWasm {
    fn parse_box(&self, input: &str) -> Result<Pudelko, JsValue> {
        let parsed = if self.lenient {
            Pudelko::parse_lenient(input)
        } else {
            Pudelko::parse(input)
        };
        parsed.map_err(|e| JsValue::from_str(&format!("Failed to parse box: {}", e)))
    }
}

#[wasm_bindgen]
impl PudelkoWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { lenient: false }
    }

    /// Accept ASCII 'x' as well as '×' between edges
    #[wasm_bindgen]
    pub fn set_lenient(&mut self, lenient: bool) {
        self.lenient = lenient;
    }

    /// Parse a box and return it as JSON with its derived metrics
    #[wasm_bindgen]
    pub fn parse(&self, input: &str) -> Result<String, JsValue> {
        let pudelko = self.parse_box(input)?;
        let json = serde_json::json!({
            "box": pudelko,
            "volume": pudelko.volume(),
            "surface_area": pudelko.surface_area(),
        });
        serde_json::to_string(&json)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize box: {}", e)))
    }

    /// Re-format a box in "m", "cm" or "mm"
    #[wasm_bindgen]
    pub fn format(&self, input: &str, unit_code: &str) -> Result<String, JsValue> {
        let pudelko = self.parse_box(input)?;
        pudelko::format_pudelko(&pudelko, unit_code)
            .map_err(|e| JsValue::from_str(&format!("Failed to format box: {}", e)))
    }

    #[wasm_bindgen]
    pub fn add(&self, left: &str, right: &str) -> Result<String, JsValue> {
        let sum = self
            .parse_box(left)?
            .checked_add(&self.parse_box(right)?)
            .map_err(|e| JsValue::from_str(&format!("Failed to add boxes: {}", e)))?;
        Ok(sum.to_string())
    }

    #[wasm_bindgen]
    pub fn compress(&self, input: &str) -> Result<String, JsValue> {
        let cube = self
            .parse_box(input)?
            .compress()
            .map_err(|e| JsValue::from_str(&format!("Failed to compress box: {}", e)))?;
        Ok(cube.to_string())
    }
}
