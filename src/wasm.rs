use wasm_bindgen::prelude::*;

/// Render a résumé record (JSON, as the editor stores it) to PDF bytes.
#[wasm_bindgen]
pub fn render_pdf(json: &str) -> Result<Vec<u8>, JsValue> {
    crate::render_json(json)
        .map(|document| document.bytes)
        .map_err(|e| JsValue::from_str(e.user_message()))
}

/// The file name the rendered document should be saved under.
#[wasm_bindgen]
pub fn pdf_file_name(json: &str) -> Result<String, JsValue> {
    let record: crate::model::ResumeRecord =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;
    Ok(record.file_name())
}
