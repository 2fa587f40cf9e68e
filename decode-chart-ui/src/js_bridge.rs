//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The renderers live in `assets/js/*.js` and are embedded at compile time.
//! They are evaluated as globals (no ES modules) once the Kepler.gl and
//! vega-embed bundles are on the page, and exposed via `window.*`.

static KEPLER_MAP_JS: &str = include_str!("../assets/js/kepler-map.js");
static VEGA_CHART_JS: &str = include_str!("../assets/js/vega-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('DeCODE JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape JSON or script text for embedding in a single-quoted JS string.
fn escape(source: &str) -> String {
    source
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Wait for the vendor bundles, then evaluate the renderer scripts at global
/// scope and flag `window.__decodeRenderersReady`. Safe to call repeatedly.
pub fn init_renderers() {
    let renderers = escape(&[KEPLER_MAP_JS, VEGA_CHART_JS].join("\n"));
    call_js(&format!(
        r#"
        (function() {{
            if (window.__decodeRenderersReady || window.__decodeRenderersLoading) return;
            window.__decodeRenderersLoading = true;
            var poll = setInterval(function() {{
                if (typeof window.vegaEmbed !== 'undefined' && typeof window.KeplerGl !== 'undefined') {{
                    clearInterval(poll);
                    (0, eval)('{renderers}');
                    window.__decodeRenderersReady = true;
                    console.log('DeCODE renderers initialized');
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Call `window.<function>(container_id, '<json>')` once renderers are ready
/// and the container exists in the DOM.
fn render_when_ready(function: &str, container_id: &str, json: &str) {
    let escaped = escape(json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__decodeRenderersReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[DeCODE] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Repaint the whole map from a Kepler `addDataToMap` payload.
pub fn render_kepler_map(container_id: &str, payload_json: &str) {
    render_when_ready("renderKeplerMap", container_id, payload_json);
}

/// Draw one Vega-Lite chart.
pub fn render_vega_chart(container_id: &str, spec_json: &str) {
    render_when_ready("renderVegaChart", container_id, spec_json);
}

/// Clear whatever was rendered into the given container.
pub fn destroy_chart(container_id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id));
    if let Some(element) = element {
        element.set_inner_html("");
    }
}
