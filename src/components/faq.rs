//! FAQ Component
//!
//! Accordion of common questions; one entry open at a time.

use leptos::*;

const QUESTIONS: &[(&str, &str)] = &[
    (
        "Do you really use only desi ghee?",
        "Yes. Every sweet and every namkeen is made in 100% pure desi ghee, \
         never vanaspati or refined oil.",
    ),
    (
        "How far ahead should I place a wedding order?",
        "For orders above 50 boxes we ask for a week's notice. Smaller orders \
         usually need just a day.",
    ),
    (
        "Do you deliver?",
        "We deliver across Haldwani for bulk orders. For regular purchases, \
         message us on WhatsApp and we'll see what we can do.",
    ),
    (
        "How long do the sweets keep?",
        "Khoya sweets are best within three days; dry fruit sweets and namkeen \
         keep for a couple of weeks in an airtight tin.",
    ),
];

/// FAQ accordion
#[component]
pub fn Faq() -> impl IntoView {
    let (open, set_open) = create_signal(None::<usize>);

    view! {
        <section id="faq" class="py-24 bg-white">
            <div class="max-w-3xl mx-auto px-4 sm:px-6">
                <h2 class="text-4xl font-black text-slate-900 uppercase tracking-tighter text-center mb-12">
                    "Questions, Answered"
                </h2>

                <div class="space-y-3">
                    {QUESTIONS
                        .iter()
                        .enumerate()
                        .map(|(i, (question, answer))| view! {
                            <div class="border border-slate-100 rounded-2xl overflow-hidden">
                                <button
                                    on:click=move |_| {
                                        set_open.update(|open| {
                                            *open = if *open == Some(i) { None } else { Some(i) };
                                        })
                                    }
                                    aria-expanded=move || (open.get() == Some(i)).to_string()
                                    class="w-full flex items-center justify-between px-6 py-5 \
                                           text-left font-bold text-slate-900 hover:bg-slate-50"
                                >
                                    <span>{*question}</span>
                                    <span class="text-red-700">
                                        {move || if open.get() == Some(i) { "\u{2212}" } else { "+" }}
                                    </span>
                                </button>
                                {move || {
                                    if open.get() == Some(i) {
                                        view! {
                                            <p class="px-6 pb-5 text-slate-500 leading-relaxed">
                                                {*answer}
                                            </p>
                                        }
                                        .into_view()
                                    } else {
                                        view! {}.into_view()
                                    }
                                }}
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
