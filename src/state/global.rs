//! Global Application State
//!
//! Reactive state management using Leptos signals. Both values follow a
//! single-writer discipline: the router writes `view`, the menu ingestor
//! writes `menu`; everything else only reads.

use leptos::*;

use crate::menu::MenuCategory;
use crate::view::View;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Currently displayed page; written only by the router
    pub view: RwSignal<View>,
    /// Parsed menu categories; written only by the menu ingestor
    pub menu: RwSignal<Vec<MenuCategory>>,
    /// True until the one-shot menu ingestion resolves (either way)
    pub menu_loading: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        view: create_rw_signal(View::Home),
        menu: create_rw_signal(Vec::new()),
        menu_loading: create_rw_signal(true),
    };

    provide_context(state);
}
