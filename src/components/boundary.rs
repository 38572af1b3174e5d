//! Section Boundary
//!
//! Last-resort containment for a page section that fails to render: the
//! failed section is replaced with a static message and a manual reload
//! action. This is not a retry mechanism.

use leptos::*;

/// Wrap page content in an error boundary with a reload fallback
#[component]
pub fn SectionBoundary(children: Children) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|_errors| view! {
            <div class="min-h-screen flex flex-col items-center justify-center text-center p-4">
                <h2 class="text-2xl font-bold mb-4 text-slate-900">
                    "Something went wrong loading this page."
                </h2>
                <p class="text-slate-500 mb-6 text-sm">
                    "The rest of the site is unaffected. Reloading usually fixes it."
                </p>
                <button
                    on:click=|_| reload_page()
                    class="bg-red-700 hover:bg-red-800 text-white px-6 py-2 rounded-full font-bold"
                >
                    "Reload Page"
                </button>
            </div>
        }>
            {children()}
        </ErrorBoundary>
    }
}

fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}
