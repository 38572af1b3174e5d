//! Full Menu Page
//!
//! Every ingested category with its banner and item cards. Each category
//! block carries `id=<slug>` so fragment navigation can land on it.

use leptos::*;

use crate::components::whatsapp::open_whatsapp;
use crate::components::Loading;
use crate::menu::MenuCategory;
use crate::router::RouterHandle;
use crate::state::GlobalState;
use crate::view::View;

/// Full menu page component
#[component]
pub fn FullMenuPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");
    let menu = state.menu;
    let loading = state.menu_loading;

    view! {
        <div class="min-h-screen bg-white pt-32 pb-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row md:items-center justify-between gap-6 mb-16">
                    <div>
                        <button
                            on:click=move |_| router.navigate(View::Home, None)
                            class="flex items-center gap-2 text-slate-500 hover:text-red-700 \
                                   font-bold transition-colors mb-4"
                        >
                            "\u{2190} Back to Home"
                        </button>
                        <h1 class="text-5xl md:text-6xl font-black text-slate-900 uppercase tracking-tighter">
                            "The Whole" <span class="text-red-700 italic">"Counter"</span>
                        </h1>
                        <p class="text-slate-500 text-xl max-w-2xl mt-4 font-medium italic">
                            "Everything we made this morning, priced as it is in the shop."
                        </p>
                    </div>
                    <button
                        on:click=|_| open_whatsapp(Some("Namaste! I'd like to place an order."))
                        class="bg-red-700 hover:bg-red-800 text-white px-8 py-4 rounded-full \
                               font-bold text-lg transition-all h-fit"
                    >
                        "Order on WhatsApp"
                    </button>
                </div>

                {move || {
                    if loading.get() {
                        return view! { <Loading caption="Fetching today's menu..." /> }.into_view();
                    }

                    let categories = menu.get();
                    if categories.is_empty() {
                        return view! {
                            <div class="py-24 text-center text-slate-400">
                                <p class="font-bold uppercase tracking-widest text-xs">
                                    "The menu isn't online yet - message us on WhatsApp and \
                                     we'll send today's list."
                                </p>
                            </div>
                        }
                        .into_view();
                    }

                    view! {
                        <div class="space-y-24">
                            {categories
                                .into_iter()
                                .map(|category| view! { <CategoryBlock category=category /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }}
            </div>
        </div>
    }
}

/// One category: banner image plus a card per item
#[component]
fn CategoryBlock(category: MenuCategory) -> impl IntoView {
    let image = category.image_url().to_string();

    view! {
        // The id makes the block a fragment target
        <div id=category.id.clone() class="scroll-mt-32">
            <div class="relative h-64 w-full rounded-3xl overflow-hidden mb-10 shadow-lg">
                <img
                    src=image
                    alt=category.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-gradient-to-r from-black/70 to-transparent" />
                <h2 class="absolute inset-0 flex items-center px-10 text-4xl md:text-5xl \
                           font-serif font-black text-white uppercase tracking-tight">
                    {category.title.clone()}
                </h2>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                {category
                    .items
                    .iter()
                    .map(|item| view! {
                        <div class="p-8 bg-slate-50 rounded-2xl border border-transparent \
                                    hover:border-red-100 hover:bg-white hover:shadow-xl \
                                    transition-all">
                            <div class="flex justify-between items-start gap-4 mb-3">
                                <h4 class="text-xl font-bold text-slate-900 uppercase tracking-tight">
                                    {item.name.clone()}
                                </h4>
                                <div class="flex flex-col items-end shrink-0">
                                    <span class="text-2xl font-black text-slate-900">
                                        {item.price.clone().unwrap_or_default()}
                                    </span>
                                    {item.unit.clone().map(|unit| view! {
                                        <span class="text-xs text-slate-400 font-bold uppercase tracking-widest">
                                            {unit}
                                        </span>
                                    })}
                                </div>
                            </div>
                            <p class="text-slate-500 text-sm leading-relaxed">
                                {item
                                    .description
                                    .clone()
                                    .unwrap_or_else(|| {
                                        "Handcrafted fresh with pure desi ghee.".to_string()
                                    })}
                            </p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
