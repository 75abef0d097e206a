//! Scene events forwarded to JavaScript

use catch_core::SceneDirector;
use wasm_bindgen::JsValue;

/// Calls `callback(kind, scene)` with kind `"ready"` or `"start"`
pub struct JsSceneDirector {
    callback: js_sys::Function,
}

impl JsSceneDirector {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }

    fn emit(&self, kind: &str, scene: &str) {
        let result = self.callback.call2(
            &JsValue::NULL,
            &JsValue::from_str(kind),
            &JsValue::from_str(scene),
        );
        if let Err(e) = result {
            log::error!("scene callback failed on {} {}: {:?}", kind, scene, e);
        }
    }
}

impl SceneDirector for JsSceneDirector {
    fn announce_ready(&mut self, scene: &str) {
        self.emit("ready", scene);
    }

    fn start(&mut self, scene: &str) {
        self.emit("start", scene);
    }
}
