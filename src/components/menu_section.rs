//! Menu Section Component
//!
//! Tabbed menu preview on the home page, fed by the ingested categories.
//! Shows a loading placeholder until ingestion resolves and a "no menu yet"
//! notice if it resolved empty.

use leptos::*;

use crate::components::Loading;
use crate::menu::MenuCategory;
use crate::state::GlobalState;

/// Tabbed menu section
#[component]
pub fn MenuSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let menu = state.menu;
    let loading = state.menu_loading;

    let (active_tab, set_active_tab) = create_signal(String::new());

    // Select the first category once data lands
    create_effect(move |_| {
        let categories = menu.get();
        if active_tab.get_untracked().is_empty() {
            if let Some(first) = categories.first() {
                set_active_tab.set(first.id.clone());
            }
        }
    });

    view! {
        <section id="menu" class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                {move || {
                    if loading.get() {
                        return view! { <Loading caption="Unveiling fresh sweets..." /> }.into_view();
                    }

                    let categories = menu.get();
                    if categories.is_empty() {
                        return view! { <NoMenuYet /> }.into_view();
                    }

                    let active = categories
                        .iter()
                        .find(|c| c.id == active_tab.get())
                        .or_else(|| categories.first())
                        .cloned();

                    view! {
                        <div>
                            <div class="flex flex-col md:flex-row md:items-end justify-between mb-12 gap-8">
                                <div>
                                    <h2 class="text-4xl md:text-5xl font-black text-slate-900 uppercase tracking-tighter">
                                        "Our Menu"
                                    </h2>
                                    <p class="text-slate-500 mt-4 max-w-xl font-medium italic">
                                        "Straight from the halwai's counter, updated every morning."
                                    </p>
                                </div>

                                <nav class="flex flex-wrap gap-2 md:justify-end" aria-label="Menu categories">
                                    {categories
                                        .iter()
                                        .map(|category| {
                                            let id = category.id.clone();
                                            let selected = id == active_tab.get();
                                            let title = category.title.clone();
                                            view! {
                                                <button
                                                    on:click=move |_| set_active_tab.set(id.clone())
                                                    class=if selected {
                                                        "px-5 py-2 rounded-full text-xs font-black uppercase \
                                                         tracking-widest bg-red-700 text-white"
                                                    } else {
                                                        "px-5 py-2 rounded-full text-xs font-black uppercase \
                                                         tracking-widest bg-slate-100 text-slate-600 \
                                                         hover:bg-slate-200"
                                                    }
                                                >
                                                    {title}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </nav>
                            </div>

                            {active
                                .map(|category| view! { <CategoryPanel category=category /> })}
                        </div>
                    }
                    .into_view()
                }}
            </div>
        </section>
    }
}

/// Banner plus item list for the active category
#[component]
fn CategoryPanel(category: MenuCategory) -> impl IntoView {
    let image = category.image_url().to_string();

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-12 gap-12 items-start">
            <div class="lg:col-span-5">
                <div class="relative h-96 rounded-3xl overflow-hidden shadow-2xl">
                    <img
                        src=image
                        alt=format!("Items from our {} category", category.title)
                        loading="lazy"
                        class="w-full h-full object-cover"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent" />
                    <h3 class="absolute bottom-8 left-8 text-3xl font-serif font-bold text-white">
                        {category.title.clone()}
                    </h3>
                </div>
            </div>

            <div class="lg:col-span-7 space-y-4">
                {category
                    .items
                    .iter()
                    .map(|item| view! {
                        <article class="p-6 bg-slate-50 hover:bg-white rounded-2xl border \
                                        border-transparent hover:border-red-100 hover:shadow-lg \
                                        transition-all">
                            <div class="flex justify-between items-start">
                                <h4 class="text-lg font-bold text-slate-900 uppercase tracking-tight">
                                    {item.name.clone()}
                                </h4>
                                <div class="flex flex-col items-end">
                                    <span class="text-xl font-black text-slate-900">
                                        {item.price.clone().unwrap_or_default()}
                                    </span>
                                    {item.unit.clone().map(|unit| view! {
                                        <span class="text-xs text-slate-400 font-bold uppercase tracking-widest">
                                            {unit}
                                        </span>
                                    })}
                                </div>
                            </div>
                            {item.description.clone().map(|description| view! {
                                <p class="text-slate-500 text-sm italic mt-2">{description}</p>
                            })}
                        </article>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Shown when ingestion resolved without any categories
#[component]
fn NoMenuYet() -> impl IntoView {
    view! {
        <div class="py-24 text-center text-slate-400">
            <p class="text-2xl mb-2">"\u{1F9C1}"</p>
            <p class="font-bold uppercase tracking-widest text-xs">
                "Today's menu is still being written - call us or drop by the shop."
            </p>
        </div>
    }
}
