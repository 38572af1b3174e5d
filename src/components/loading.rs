//! Loading Component
//!
//! Loading placeholder shown while the menu feed is in flight.

use leptos::*;

/// Centered loading spinner with a caption
#[component]
pub fn Loading(
    #[prop(default = "Loading...")]
    caption: &'static str,
) -> impl IntoView {
    view! {
        <div class="py-24 flex flex-col items-center justify-center text-slate-400">
            <div class="loading-spinner w-10 h-10 mb-4" />
            <p class="font-bold uppercase tracking-widest text-xs">{caption}</p>
        </div>
    }
}
