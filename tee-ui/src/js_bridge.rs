//! Typed wrappers around the 3D scene script via `js_sys::eval()`.
//!
//! three.js and its OrbitControls are loaded from a CDN the first time the
//! 3D preview is shown. `assets/js/tshirt-scene.js` is evaluated as a global
//! script once `THREE` is available, and its entry points are exposed via
//! `window.*`. Renderer input is passed as JSON object literals.

use serde::Serialize;
use tee_core::{RenderPayload, SceneConfig};
use wasm_bindgen::{JsCast, JsValue};

static SCENE_JS: &str = include_str!("../assets/js/tshirt-scene.js");

const THREE_URL: &str = "https://unpkg.com/three@0.147.0/build/three.min.js";
const ORBIT_CONTROLS_URL: &str =
    "https://unpkg.com/three@0.147.0/examples/js/controls/OrbitControls.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Tee JS call failed:', e); }}",
        code
    );
    if let Err(err) = js_sys::eval(&wrapped) {
        log::warn!("js eval failed: {:?}", err);
    }
}

/// Append a `<script src>` to the document head, keeping insertion order.
fn inject_script(id: &str, src: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let script = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    script.set_id(id);
    script.set_src(src);
    script.set_async(false);
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("no <head>"))?;
    head.append_child(&script)?;
    Ok(())
}

/// Load three.js and the scene script. Safe to call more than once.
///
/// Polls until `THREE.OrbitControls` exists, then evaluates the scene script
/// at global scope and promotes its functions to `window`.
pub fn init_scene() {
    for (id, src) in [("tee-three", THREE_URL), ("tee-orbit-controls", ORBIT_CONTROLS_URL)] {
        if let Err(err) = inject_script(id, src) {
            log::warn!("could not load {src}: {err:?}");
            return;
        }
    }

    let store_js = format!(
        "if (!window.__teeSceneReady && !window.__teeSceneScript) {{ window.__teeSceneScript = {}; }}",
        serde_json::to_string(SCENE_JS).unwrap_or_default()
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (window.__teeSceneReady || window.__teeScenePolling) return;
            window.__teeScenePolling = true;
            var waitForThree = setInterval(function() {
                if (typeof THREE !== 'undefined' && typeof THREE.OrbitControls !== 'undefined') {
                    clearInterval(waitForThree);
                    (0, eval)(window.__teeSceneScript);
                    delete window.__teeSceneScript;
                    if (typeof renderTshirtScene !== 'undefined') window.renderTshirtScene = renderTshirtScene;
                    if (typeof destroyTshirtScene !== 'undefined') window.destroyTshirtScene = destroyTshirtScene;
                    window.__teeSceneReady = true;
                    window.__teeScenePolling = false;
                    console.log('Tee scene initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::warn!("failed to serialize scene input: {err}");
        "null".to_string()
    })
}

/// Build the JS that renders (or updates) the scene in `container_id`.
pub fn render_scene_js(container_id: &str, payload: &RenderPayload, config: &SceneConfig) -> String {
    let payload_json = to_json(payload);
    let config_json = to_json(config);
    format!(
        r#"
        (function() {{
            var run = function() {{
                try {{
                    window.renderTshirtScene('{container_id}', {payload_json}, {config_json});
                }} catch(e) {{ console.error('[Tee] renderTshirtScene error:', e); }}
            }};
            if (window.__teeSceneReady && document.getElementById('{container_id}')) {{
                run();
                return;
            }}
            var poll = setInterval(function() {{
                if (window.__teeSceneReady &&
                    typeof window.renderTshirtScene !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    run();
                }}
            }}, 100);
        }})();
        "#,
    )
}

/// Render the garment scene with the current customization.
///
/// Waits for three.js, the scene script and the container element before
/// drawing. Later calls on the same container update the decal and text.
pub fn render_scene(container_id: &str, payload: &RenderPayload, config: &SceneConfig) {
    call_js(&render_scene_js(container_id, payload, config));
}

/// Tear down the scene in the given container and release its WebGL context.
pub fn destroy_scene(container_id: &str) {
    call_js(&format!(
        "if (window.destroyTshirtScene) {{ window.destroyTshirtScene('{}'); }}",
        container_id
    ));
}
