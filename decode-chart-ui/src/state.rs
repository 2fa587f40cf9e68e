//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use decode_data::SelectionSet;
use decode_render::{Dashboard, RenderPass};
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Catalog, static tables and layer-id policy (None until loaded)
    pub dashboard: Signal<Option<Rc<Dashboard>>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Fatal startup error, if any
    pub error_msg: Signal<Option<String>>,
    /// Indicator names in catalog order, one checkbox each
    pub indicators: Signal<Vec<String>>,
    /// Indicators currently toggled on
    pub selection: Signal<SelectionSet>,
    /// Output of the latest render pass
    pub render_pass: Signal<Option<RenderPass>>,
}

impl AppState {
    /// Create a new AppState with nothing loaded and nothing selected.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            indicators: Signal::new(Vec::new()),
            selection: Signal::new(SelectionSet::new()),
            render_pass: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
