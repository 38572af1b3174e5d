//! View Router
//!
//! Keeps the active [`View`] in sync with the address bar, scroll position
//! and document metadata. Every browser effect goes through the [`NavEnv`]
//! capability so the transition logic can be exercised without a DOM.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::state::GlobalState;
use crate::view::View;

/// Delay before an anchor scroll, so the target view's content can mount
pub const ANCHOR_SCROLL_DELAY_MS: u32 = 100;

/// Browser capabilities the router depends on
pub trait NavEnv {
    /// Current address path, e.g. `/menu`
    fn current_path(&self) -> String;
    /// Current fragment without the leading `#`, if any
    fn current_fragment(&self) -> Option<String>;
    /// Push a new history entry for `url` (path plus optional fragment)
    fn push_history(&self, url: &str);
    /// Smooth-scroll the viewport to the top
    fn scroll_to_top(&self);
    /// Smooth-scroll to the element with `id` after [`ANCHOR_SCROLL_DELAY_MS`];
    /// a missing element is silently ignored
    fn scroll_to_anchor(&self, id: &str);
    /// Overwrite the document title and meta description
    fn set_metadata(&self, title: &str, description: &str);
}

/// Navigation state machine over an injected environment
pub struct Router<E: NavEnv> {
    env: E,
    current: View,
    on_change: Box<dyn Fn(View)>,
}

impl<E: NavEnv> Router<E> {
    /// Create a router resolving the initial view from the current address.
    /// `on_change` is invoked on every transition with the new view.
    pub fn new(env: E, on_change: impl Fn(View) + 'static) -> Self {
        let current = View::from_path(&env.current_path());
        Self {
            env,
            current,
            on_change: Box::new(on_change),
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Explicit navigation to `view`, optionally targeting an in-page anchor.
    ///
    /// Pushes a history entry only when the target address differs from the
    /// current one, so redundant navigation never duplicates history.
    pub fn navigate(&mut self, view: View, anchor: Option<&str>) {
        let mut target = view.path().to_string();
        if let Some(anchor) = anchor {
            target.push('#');
            target.push_str(anchor);
        }

        let mut current = self.env.current_path();
        if let Some(fragment) = self.env.current_fragment() {
            current.push('#');
            current.push_str(&fragment);
        }
        if current != target {
            self.env.push_history(&target);
        }

        self.set_view(view);

        match anchor {
            None => self.env.scroll_to_top(),
            Some(anchor) => self.env.scroll_to_anchor(anchor),
        }
    }

    /// External navigation: the address already changed (initial load or the
    /// browser's back/forward), so recompute the view from it.
    pub fn handle_url_change(&mut self) {
        let path = self.env.current_path();
        let view = View::from_path(&path);
        self.set_view(view);

        if let Some(fragment) = self.env.current_fragment() {
            self.env.scroll_to_anchor(&fragment);
        } else if view == View::Home && path == "/" {
            self.env.scroll_to_top();
        }
    }

    fn set_view(&mut self, view: View) {
        self.current = view;
        let (title, description) = view.metadata();
        self.env.set_metadata(title, description);
        (self.on_change)(view);
    }
}

/// [`NavEnv`] backed by the real browser window
pub struct BrowserEnv;

impl NavEnv for BrowserEnv {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn current_fragment(&self) -> Option<String> {
        let hash = web_sys::window()?.location().hash().ok()?;
        let id = hash.trim_start_matches('#');
        if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        }
    }

    fn push_history(&self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
            }
        }
    }

    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn scroll_to_anchor(&self, id: &str) {
        let id = id.to_string();
        gloo_timers::callback::Timeout::new(ANCHOR_SCROLL_DELAY_MS, move || {
            let document = match web_sys::window().and_then(|w| w.document()) {
                Some(document) => document,
                None => return,
            };
            if let Some(element) = document.get_element_by_id(&id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })
        .forget();
    }

    fn set_metadata(&self, title: &str, description: &str) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(title);
            if let Ok(Some(meta)) = document.query_selector("meta[name=\"description\"]") {
                let _ = meta.set_attribute("content", description);
            }
        }
    }
}

/// Cloneable handle to the process-wide router, shared via context
#[derive(Clone)]
pub struct RouterHandle {
    inner: Rc<RefCell<Router<BrowserEnv>>>,
}

impl RouterHandle {
    pub fn navigate(&self, view: View, anchor: Option<&str>) {
        self.inner.borrow_mut().navigate(view, anchor);
    }

    fn url_changed(&self) {
        self.inner.borrow_mut().handle_url_change();
    }
}

/// Build the router over the browser environment, resolve the initial view,
/// hook up back/forward navigation and provide the handle as context.
pub fn provide_router(state: &GlobalState) {
    let view_signal = state.view;
    let mut router = Router::new(BrowserEnv, move |view| view_signal.set(view));
    router.handle_url_change();

    let handle = RouterHandle {
        inner: Rc::new(RefCell::new(router)),
    };

    let popstate_handle = handle.clone();
    let closure = Closure::<dyn FnMut()>::new(move || popstate_handle.url_changed());
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
    }
    // Listener lives for the page lifetime
    closure.forget();

    provide_context(handle);
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scroll effects requested of the environment
    #[derive(Clone, Debug, PartialEq, Eq)]
    enum Scroll {
        Top,
        Anchor(String),
    }

    /// Recording fake of the browser environment
    #[derive(Clone, Default)]
    struct RecordingEnv {
        path: Rc<RefCell<String>>,
        fragment: Rc<RefCell<Option<String>>>,
        pushed: Rc<RefCell<Vec<String>>>,
        scrolls: Rc<RefCell<Vec<Scroll>>>,
        metadata: Rc<RefCell<Vec<(String, String)>>>,
    }

    impl RecordingEnv {
        fn at(path: &str) -> Self {
            let env = Self::default();
            *env.path.borrow_mut() = path.to_string();
            env
        }

        fn with_fragment(path: &str, fragment: &str) -> Self {
            let env = Self::at(path);
            *env.fragment.borrow_mut() = Some(fragment.to_string());
            env
        }

        fn last_metadata(&self) -> (String, String) {
            self.metadata.borrow().last().cloned().expect("no metadata written")
        }
    }

    impl NavEnv for RecordingEnv {
        fn current_path(&self) -> String {
            self.path.borrow().clone()
        }

        fn current_fragment(&self) -> Option<String> {
            self.fragment.borrow().clone()
        }

        fn push_history(&self, url: &str) {
            // Mirror the browser: a push changes the current address
            let (path, fragment) = match url.split_once('#') {
                Some((path, fragment)) => (path.to_string(), Some(fragment.to_string())),
                None => (url.to_string(), None),
            };
            *self.path.borrow_mut() = path;
            *self.fragment.borrow_mut() = fragment;
            self.pushed.borrow_mut().push(url.to_string());
        }

        fn scroll_to_top(&self) {
            self.scrolls.borrow_mut().push(Scroll::Top);
        }

        fn scroll_to_anchor(&self, id: &str) {
            self.scrolls.borrow_mut().push(Scroll::Anchor(id.to_string()));
        }

        fn set_metadata(&self, title: &str, description: &str) {
            self.metadata
                .borrow_mut()
                .push((title.to_string(), description.to_string()));
        }
    }

    fn router_at(path: &str) -> (Router<RecordingEnv>, RecordingEnv) {
        let env = RecordingEnv::at(path);
        let router = Router::new(env.clone(), |_| {});
        (router, env)
    }

    #[test]
    fn test_initial_view_resolves_from_every_address() {
        let cases = [
            ("/", View::Home),
            ("/menu", View::FullMenu),
            ("/gifting", View::Gifting),
            ("/story", View::Story),
            ("/privacy", View::Privacy),
            ("/terms", View::Terms),
            ("/refund", View::Refund),
        ];
        for (path, expected) in cases {
            let (mut router, env) = router_at(path);
            router.handle_url_change();
            assert_eq!(router.current(), expected, "path {}", path);

            let (title, description) = expected.metadata();
            assert_eq!(env.last_metadata(), (title.to_string(), description.to_string()));
        }
    }

    #[test]
    fn test_navigation_pushes_one_history_entry() {
        let (mut router, env) = router_at("/");
        router.navigate(View::FullMenu, None);

        assert_eq!(router.current(), View::FullMenu);
        assert_eq!(*env.pushed.borrow(), vec!["/menu".to_string()]);
    }

    #[test]
    fn test_redundant_navigation_is_idempotent() {
        let (mut router, env) = router_at("/");
        router.navigate(View::Gifting, Some("hampers"));
        router.navigate(View::Gifting, Some("hampers"));

        assert_eq!(*env.pushed.borrow(), vec!["/gifting#hampers".to_string()]);
        // The view itself is still set on both requests
        assert_eq!(env.metadata.borrow().len(), 2);
    }

    #[test]
    fn test_navigation_without_anchor_scrolls_to_top() {
        let (mut router, env) = router_at("/menu");
        router.navigate(View::Home, None);

        assert_eq!(*env.scrolls.borrow(), vec![Scroll::Top]);
        assert_eq!(*env.pushed.borrow(), vec!["/".to_string()]);
    }

    #[test]
    fn test_navigation_with_anchor_requests_anchor_scroll() {
        let (mut router, env) = router_at("/");
        router.navigate(View::Home, Some("contact"));

        assert_eq!(
            *env.scrolls.borrow(),
            vec![Scroll::Anchor("contact".to_string())]
        );
        assert_eq!(*env.pushed.borrow(), vec!["/#contact".to_string()]);
    }

    #[test]
    fn test_back_navigation_recomputes_view_from_address() {
        let (mut router, env) = router_at("/");
        router.navigate(View::Story, None);

        // Simulate the browser going back to the root
        *env.path.borrow_mut() = "/".to_string();
        *env.fragment.borrow_mut() = None;
        router.handle_url_change();

        assert_eq!(router.current(), View::Home);
        // Root home with no fragment scrolls to top
        assert_eq!(env.scrolls.borrow().last(), Some(&Scroll::Top));
    }

    #[test]
    fn test_url_change_with_fragment_scrolls_to_it() {
        let env = RecordingEnv::with_fragment("/", "story");
        let mut router = Router::new(env.clone(), |_| {});
        router.handle_url_change();

        assert_eq!(router.current(), View::Home);
        assert_eq!(
            *env.scrolls.borrow(),
            vec![Scroll::Anchor("story".to_string())]
        );
    }

    #[test]
    fn test_on_change_reports_every_transition() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let env = RecordingEnv::at("/");
        let mut router = Router::new(env, move |view| sink.borrow_mut().push(view));

        router.handle_url_change();
        router.navigate(View::FullMenu, None);
        router.navigate(View::Gifting, None);

        assert_eq!(*seen.borrow(), vec![View::Home, View::FullMenu, View::Gifting]);
    }

    #[test]
    fn test_unknown_address_degrades_to_home() {
        let (mut router, _env) = router_at("/does-not-exist");
        router.handle_url_change();
        assert_eq!(router.current(), View::Home);
    }
}
