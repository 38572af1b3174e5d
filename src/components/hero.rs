//! Hero Component
//!
//! Landing banner with the headline and the menu call-to-action.

use leptos::*;

use crate::router::RouterHandle;
use crate::view::View;

/// Hero banner component
#[component]
pub fn Hero() -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");

    let menu_router = router.clone();
    view! {
        <header class="pt-40 pb-24 bg-slate-950 text-white relative overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <p class="text-red-400 font-black text-xs uppercase tracking-widest mb-6">
                    "Pure Desi Ghee. Every Single Day."
                </p>
                <h1 class="text-5xl md:text-7xl font-black uppercase tracking-tighter leading-tight mb-8">
                    "Sweets the way" <br/>
                    <span class="text-red-500 italic font-serif lowercase">"the hills remember."</span>
                </h1>
                <p class="text-xl text-slate-400 max-w-2xl mb-10 leading-relaxed">
                    "Bal mithai, singodi and fresh jalebi made every morning in Haldwani, \
                     from recipes that came down from the Kumaon hills."
                </p>
                <div class="flex flex-col sm:flex-row gap-4">
                    <button
                        on:click=move |_| menu_router.navigate(View::FullMenu, None)
                        class="bg-red-700 hover:bg-red-800 text-white px-10 py-5 rounded-full \
                               font-black text-lg transition-all shadow-xl"
                    >
                        "Explore Our Menu"
                    </button>
                    <button
                        on:click=move |_| router.navigate(View::Home, Some("contact"))
                        class="bg-white/10 hover:bg-white/20 border border-white/20 text-white \
                               px-10 py-5 rounded-full font-black text-lg transition-all"
                    >
                        "Visit The Shop"
                    </button>
                </div>
            </div>
        </header>
    }
}
