//! Featured Sweets Component
//!
//! Static grid of the house specialties with a link into the full menu.

use leptos::*;

use crate::router::RouterHandle;
use crate::view::View;

struct Featured {
    name: &'static str,
    blurb: &'static str,
    image: &'static str,
}

const FEATURED: &[Featured] = &[
    Featured {
        name: "Bal Mithai",
        blurb: "Roasted khoya fudge rolled in sugar pearls, the Kumaon classic.",
        image: "https://images.unsplash.com/photo-1606471191009-63994c53433b?auto=format&fit=crop&q=80&w=600",
    },
    Featured {
        name: "Singodi",
        blurb: "Khoya and coconut wrapped in a fresh maalu leaf.",
        image: "https://images.unsplash.com/photo-1605197161470-5d2a9af0ac7e?auto=format&fit=crop&q=80&w=600",
    },
    Featured {
        name: "Desi Ghee Jalebi",
        blurb: "Fried to order, syrup-soaked and always crisp.",
        image: "https://images.unsplash.com/photo-1589301760014-d929f3979dbc?auto=format&fit=crop&q=80&w=600",
    },
];

/// Featured sweets grid
#[component]
pub fn FeaturedSweets() -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");

    view! {
        <section id="featured" class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-black text-slate-900 uppercase tracking-tighter">
                        "House Specialties"
                    </h2>
                    <p class="text-slate-500 mt-4 font-medium italic">
                        "Three sweets people cross the city for."
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURED
                        .iter()
                        .map(|sweet| view! {
                            <article class="group rounded-3xl overflow-hidden bg-slate-50 \
                                            hover:shadow-xl transition-all">
                                <img
                                    src=sweet.image
                                    alt=sweet.name
                                    loading="lazy"
                                    class="w-full h-56 object-cover group-hover:scale-105 \
                                           transition-transform duration-700"
                                />
                                <div class="p-8">
                                    <h3 class="text-xl font-bold text-slate-900 uppercase tracking-tight mb-2">
                                        {sweet.name}
                                    </h3>
                                    <p class="text-slate-500 text-sm leading-relaxed">{sweet.blurb}</p>
                                </div>
                            </article>
                        })
                        .collect_view()}
                </div>

                <div class="flex justify-center mt-12">
                    <button
                        on:click=move |_| router.navigate(View::FullMenu, None)
                        class="bg-slate-950 hover:bg-black text-white px-12 py-5 rounded-full \
                               font-black text-lg transition-all"
                    >
                        "See The Whole Counter"
                    </button>
                </div>
            </div>
        </section>
    }
}
