//! Navigation Component
//!
//! Header navigation bar with brand and links, driven by the config table.

use leptos::*;

use crate::config::{self, NavItem};
use crate::router::RouterHandle;
use crate::state::GlobalState;
use crate::view::View;

/// Navigation header component
#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");
    let (menu_open, set_menu_open) = create_signal(false);

    let brand_router = router.clone();
    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 bg-white/90 backdrop-blur border-b border-slate-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-20">
                    // Brand
                    <button
                        on:click=move |_| brand_router.navigate(View::Home, None)
                        class="flex items-center gap-3"
                        aria-label="Madhuvan Sweets home"
                    >
                        <span class="text-2xl">"\u{1F36F}"</span>
                        <span class="text-xl font-black uppercase tracking-tight text-slate-900">
                            "Madhuvan Sweets"
                        </span>
                    </button>

                    // Desktop links
                    <div class="hidden md:flex items-center gap-1">
                        {config::NAV_ITEMS
                            .iter()
                            .map(|item| view! { <NavLink item=*item /> })
                            .collect_view()}
                    </div>

                    // Mobile toggle
                    <button
                        class="md:hidden text-slate-900 text-2xl"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
                    </button>
                </div>
            </div>

            // Mobile menu
            {move || {
                if menu_open.get() {
                    view! {
                        <div class="md:hidden bg-white border-t border-slate-100 px-4 py-4 flex flex-col gap-2">
                            {config::NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <NavLink item=*item close_menu=set_menu_open />
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    item: NavItem,
    #[prop(optional)]
    close_menu: Option<WriteSignal<bool>>,
) -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let view_signal = state.view;

    // Anchor links always point at a section of Home, so only anchor-free
    // entries get the active highlight
    let is_active = move || item.anchor.is_none() && view_signal.get() == item.view;

    view! {
        <button
            on:click=move |_| {
                router.navigate(item.view, item.anchor);
                if let Some(close_menu) = close_menu {
                    close_menu.set(false);
                }
            }
            class=move || {
                if is_active() {
                    "px-4 py-2 rounded-full text-xs font-black uppercase tracking-widest \
                     bg-red-700 text-white"
                } else {
                    "px-4 py-2 rounded-full text-xs font-black uppercase tracking-widest \
                     text-slate-600 hover:text-red-700 transition-colors"
                }
            }
        >
            {item.label}
        </button>
    }
}
