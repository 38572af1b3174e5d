//! App Root Component
//!
//! Root component wiring the global providers, the view router and the
//! one-shot menu ingestion.

use leptos::*;

use crate::components::{FloatingWhatsApp, Footer, Navbar, SectionBoundary};
use crate::config;
use crate::menu;
use crate::pages::{FullMenuPage, GiftingPage, HomePage, LegalPage, StoryPage};
use crate::router::provide_router;
use crate::state::{provide_global_state, GlobalState};
use crate::view::View;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Resolve the initial view from the address and start listening for
    // back/forward navigation
    provide_router(&state);

    // One-shot menu ingestion; the router never waits on this
    let menu_signal = state.menu;
    let loading_signal = state.menu_loading;
    spawn_local(async move {
        let categories = menu::fetch_menu(&config::get_sheet_id()).await;
        menu_signal.set(categories);
        loading_signal.set(false);
    });

    let view_signal = state.view;
    view! {
        <div class="min-h-screen bg-white">
            <Navbar />

            <SectionBoundary>
                {move || match view_signal.get() {
                    View::Home => view! { <HomePage /> }.into_view(),
                    View::FullMenu => view! { <FullMenuPage /> }.into_view(),
                    View::Gifting => view! { <GiftingPage /> }.into_view(),
                    View::Story => view! { <StoryPage /> }.into_view(),
                    View::Privacy | View::Terms | View::Refund => {
                        view! { <LegalPage /> }.into_view()
                    }
                }}
            </SectionBoundary>

            <Footer />

            // Floating order button
            <FloatingWhatsApp />
        </div>
    }
}
