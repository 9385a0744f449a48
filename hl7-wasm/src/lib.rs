//! Framework-neutral WASM <-> JavaScript bridge.

use hl7_core::{ErrorPolicy, FlattenConfig, Hl7Error};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Deserialize, Default)]
struct JsConvertConfig {
    #[serde(default)]
    use_long_names: Option<bool>,
    #[serde(default)]
    strict: Option<bool>,
}

impl From<JsConvertConfig> for FlattenConfig {
    fn from(cfg: JsConvertConfig) -> Self {
        let mut base = FlattenConfig::default();
        if let Some(use_long_names) = cfg.use_long_names {
            base.use_long_names = use_long_names;
        }
        base
    }
}

impl JsConvertConfig {
    fn policy(&self) -> ErrorPolicy {
        match self.strict {
            Some(true) => ErrorPolicy::Abort,
            _ => ErrorPolicy::EmptyRecord,
        }
    }
}

/// Convert one ER7 message into a plain JS object.
///
/// `config` accepts `{ use_long_names?: boolean, strict?: boolean }`. Without
/// `strict`, a message that does not parse yields `{}`.
#[wasm_bindgen]
pub fn convert_message(message: &str, config: Option<JsValue>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let cfg = match config {
        Some(js_cfg) => serde_wasm_bindgen::from_value::<JsConvertConfig>(js_cfg)
            .map_err(|err| JsValue::from_str(&format!("Cannot read config: {err}")))?,
        None => JsConvertConfig::default(),
    };
    let policy = cfg.policy();
    let flatten_config = FlattenConfig::from(cfg);

    let record = match policy {
        ErrorPolicy::Abort => hl7_er7::convert_message_str(message, &flatten_config)
            .map_err(|err| JsValue::from_str(&format_hl7_error(err)))?,
        ErrorPolicy::EmptyRecord => hl7_er7::convert_line(message, &flatten_config),
    };

    record
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&format!("Cannot serialize record: {err}")))
}

fn format_hl7_error(err: Hl7Error) -> String {
    format!("HL7 error: {err}")
}
