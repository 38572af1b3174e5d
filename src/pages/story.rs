//! Story Page
//!
//! The shop's history, long form.

use leptos::*;

use crate::router::RouterHandle;
use crate::view::View;

const CHAPTERS: &[(&str, &str)] = &[
    (
        "2009 - One stove, one notebook",
        "Kamla Joshi started making bal mithai at home in Haldwani, selling to \
         neighbours who missed the taste of Almora. The recipes came from her \
         mother's handwritten notebook.",
    ),
    (
        "2014 - The first counter",
        "A rented half-shop on Nainital Road, one glass counter, and a jalebi \
         kadhai by the door. The morning queue started that winter and never \
         really stopped.",
    ),
    (
        "2021 - The family returns",
        "Both children came back during the pandemic, and what had been a \
         kitchen became a brand: proper packaging, a second counter, and the \
         same notebook, laminated now.",
    ),
    (
        "Today",
        "Fourteen people, two counters, and every batch still tasted by Kamla \
         before it reaches the tray.",
    ),
];

/// Story page component
#[component]
pub fn StoryPage() -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");

    view! {
        <div class="min-h-screen bg-white pt-32 pb-24">
            <div class="max-w-3xl mx-auto px-4 sm:px-6">
                <button
                    on:click=move |_| router.navigate(View::Home, None)
                    class="flex items-center gap-2 text-slate-500 hover:text-red-700 \
                           font-bold transition-colors mb-4"
                >
                    "\u{2190} Back to Home"
                </button>

                <h1 class="text-5xl md:text-6xl font-black text-slate-900 uppercase tracking-tighter mb-4">
                    "Our" <span class="text-red-700 italic">"Story"</span>
                </h1>
                <p class="text-slate-500 text-xl mb-16 font-medium italic">
                    "Seventeen years, one notebook."
                </p>

                <div class="space-y-12">
                    {CHAPTERS
                        .iter()
                        .map(|(heading, body)| view! {
                            <article>
                                <h2 class="text-2xl font-black text-slate-900 uppercase tracking-tight mb-3">
                                    {*heading}
                                </h2>
                                <p class="text-slate-600 text-lg leading-relaxed">{*body}</p>
                            </article>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
