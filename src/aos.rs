use wasm_bindgen::prelude::*;

use crate::config::AosOptions;
use crate::error::DomError;

#[wasm_bindgen]
extern "C" {
    // Throws a ReferenceError if the AOS script tag didn't load.
    #[wasm_bindgen(js_namespace = AOS, js_name = init, catch)]
    fn aos_init(options: JsValue) -> Result<(), JsValue>;
}

pub fn init(options: &AosOptions) -> Result<(), DomError> {
    let options = serde_wasm_bindgen::to_value(options).map_err(|e| DomError::Js(e.to_string()))?;
    aos_init(options)?;
    Ok(())
}
