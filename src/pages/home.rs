//! Home Page
//!
//! The landing view: hero, story teaser, reviews, featured sweets, tabbed
//! menu preview, gifting pitch, FAQ and contact.

use leptos::*;

use crate::components::{ContactInfo, Faq, FeaturedSweets, Hero, MenuSection};
use crate::router::RouterHandle;
use crate::view::View;

const REVIEWS: &[(&str, &str, &str)] = &[
    (
        "The bal mithai tastes exactly like the one from my childhood trips to \
         Almora. The jalebis are worth the queue.",
        "Deepa Bisht",
        "Local Guide",
    ),
    (
        "Ordered 150 boxes for my daughter's wedding. Everything arrived packed \
         beautifully and dead fresh.",
        "Rajesh Pant",
        "Wedding Client",
    ),
    (
        "You can taste the ghee. That's the whole review.",
        "Mohit Arya",
        "Regular Customer",
    ),
];

/// Home page component
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />

        <main id="main-content">
            <StoryTeaser />
            <Reviews />
            <FeaturedSweets />
            <MenuSection />
            <GiftingPitch />
            <Faq />
            <ContactInfo />
        </main>
    }
}

/// Short version of the shop's story, linking to the full page
#[component]
fn StoryTeaser() -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");

    view! {
        <section id="story" class="py-24 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <article class="space-y-8">
                        <div class="inline-flex items-center gap-2 px-4 py-2 bg-slate-100 \
                                    rounded-full text-slate-600 text-xs font-black uppercase \
                                    tracking-widest">
                            "Est. 2009"
                        </div>
                        <h2 class="text-5xl font-black text-slate-900 uppercase tracking-tighter leading-tight">
                            "It started at" <br/>
                            <span class="text-red-700 italic font-serif lowercase">"a family stove."</span>
                        </h2>
                        <p class="text-slate-600 text-xl leading-relaxed font-medium italic">
                            "Madhuvan began with one brass kadhai, a sack of khoya and a \
                             grandmother's notebook of hill recipes. Seventeen years later \
                             the kadhai is bigger. The notebook is the same."
                        </p>
                        <button
                            on:click=move |_| router.navigate(View::Story, None)
                            class="inline-flex items-center gap-2 text-red-700 font-black uppercase \
                                   tracking-widest border-b-2 border-red-700 pb-1 \
                                   hover:text-red-900 transition-colors"
                        >
                            "Read Our Full Journey \u{2192}"
                        </button>
                    </article>

                    <img
                        src="https://images.unsplash.com/photo-1556910103-1c02745a30bf?auto=format&fit=crop&q=80&w=700"
                        alt="Sweets being prepared in the Madhuvan kitchen"
                        loading="lazy"
                        class="w-full h-[420px] object-cover rounded-3xl shadow-2xl"
                    />
                </div>
            </div>
        </section>
    }
}

/// Customer review cards
#[component]
fn Reviews() -> impl IntoView {
    view! {
        <section id="reviews" class="py-24 bg-slate-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <p class="text-amber-500 text-2xl mb-2">"\u{2605}\u{2605}\u{2605}\u{2605}\u{2605} 4.8/5"</p>
                    <h2 class="text-4xl md:text-5xl font-black text-slate-900 uppercase tracking-tighter">
                        "Loved by Haldwani"
                    </h2>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {REVIEWS
                        .iter()
                        .map(|(text, author, role)| view! {
                            <figure class="bg-white p-10 rounded-3xl shadow-xl border border-slate-100">
                                <blockquote class="text-slate-600 text-lg leading-relaxed mb-8 italic">
                                    "\u{201C}" {*text} "\u{201D}"
                                </blockquote>
                                <figcaption>
                                    <cite class="font-black text-slate-900 uppercase tracking-tight not-italic">
                                        {*author}
                                    </cite>
                                    <p class="text-slate-400 text-xs font-bold uppercase tracking-widest">
                                        {*role}
                                    </p>
                                </figcaption>
                            </figure>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Gifting and bulk-order pitch, linking to the gifting page
#[component]
fn GiftingPitch() -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");

    view! {
        <section id="gifting" class="py-24 bg-slate-950 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-red-700/10 \
                            text-red-400 border border-red-700/20 font-black text-xs uppercase \
                            tracking-widest mb-8">
                    "Bulk & Gifting"
                </div>
                <h2 class="text-5xl md:text-6xl font-black mb-8 uppercase tracking-tighter">
                    "Weddings, festivals" <br/>
                    <span class="text-red-500 italic font-serif lowercase">"and very good news."</span>
                </h2>
                <p class="text-xl text-slate-400 mb-10 max-w-2xl mx-auto leading-relaxed">
                    "Custom wedding boxes, corporate hampers and bulk orders, packed by hand \
                     and delivered on time."
                </p>
                <button
                    on:click=move |_| router.navigate(View::Gifting, None)
                    class="bg-red-700 hover:bg-red-800 text-white px-10 py-5 rounded-full \
                           font-black text-lg transition-all shadow-xl"
                >
                    "View Gifting Catalog"
                </button>
            </div>
        </section>
    }
}
