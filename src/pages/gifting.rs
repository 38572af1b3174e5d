//! Gifting Page
//!
//! Static catalog of wedding, corporate and festival offerings.

use leptos::*;

use crate::components::whatsapp::open_whatsapp;
use crate::router::RouterHandle;
use crate::view::View;

const OFFERINGS: &[(&str, &str)] = &[
    (
        "Wedding Boxes",
        "Two to twelve compartment boxes in your wedding colours, filled with \
         the sweets you pick. Minimum 25 boxes.",
    ),
    (
        "Corporate Hampers",
        "Diwali and year-end hampers with branded sleeves, dry fruit sweets \
         and namkeen that travel well.",
    ),
    (
        "Festival Bulk Orders",
        "Holi gujiya, Diwali ladoo, bhai dooj boxes - ordered by the kilo, \
         delivered the same morning they're made.",
    ),
    (
        "Custom Requests",
        "Sugar-free batches, specific hill recipes, oversized laddoos for \
         inaugurations. Ask - the kitchen likes a challenge.",
    ),
];

/// Gifting page component
#[component]
pub fn GiftingPage() -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");

    view! {
        <div class="min-h-screen bg-white pt-32 pb-24">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <button
                    on:click=move |_| router.navigate(View::Home, None)
                    class="flex items-center gap-2 text-slate-500 hover:text-red-700 \
                           font-bold transition-colors mb-4"
                >
                    "\u{2190} Back to Home"
                </button>

                <h1 class="text-5xl md:text-6xl font-black text-slate-900 uppercase tracking-tighter mb-4">
                    "Gifting &" <span class="text-red-700 italic">"Bulk"</span>
                </h1>
                <p class="text-slate-500 text-xl max-w-2xl mb-16 font-medium italic">
                    "Five hundred weddings and counting. Here's what we can pack for yours."
                </p>

                <div id="hampers" class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-16">
                    {OFFERINGS
                        .iter()
                        .map(|(title, blurb)| view! {
                            <article class="p-10 bg-slate-50 rounded-3xl border border-transparent \
                                            hover:border-red-100 hover:shadow-xl transition-all">
                                <h3 class="text-2xl font-black text-slate-900 uppercase tracking-tight mb-4">
                                    {*title}
                                </h3>
                                <p class="text-slate-500 leading-relaxed">{*blurb}</p>
                            </article>
                        })
                        .collect_view()}
                </div>

                <div class="p-12 bg-slate-950 rounded-3xl text-center">
                    <h3 class="text-3xl font-black text-white mb-4 uppercase">
                        "Planning Something Big?"
                    </h3>
                    <p class="text-slate-400 text-lg max-w-2xl mx-auto mb-10 leading-relaxed">
                        "Tell us the date, the headcount and your budget. We'll send a quote \
                         and a sample box."
                    </p>
                    <button
                        on:click=|_| open_whatsapp(Some("I'm interested in a bulk order quote."))
                        class="bg-red-700 hover:bg-red-800 text-white px-10 py-4 rounded-full \
                               font-bold text-lg transition-all"
                    >
                        "Request Bulk Quote"
                    </button>
                </div>
            </div>
        </div>
    }
}
