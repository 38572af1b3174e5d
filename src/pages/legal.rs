//! Legal Page
//!
//! Renders whichever of the three policy documents the current view asks
//! for. The documents are static text.

use leptos::*;

use crate::router::RouterHandle;
use crate::state::GlobalState;
use crate::view::View;

/// Legal page component; picks the document from the active view
#[component]
pub fn LegalPage() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");
    let view_signal = state.view;

    view! {
        <div class="min-h-screen bg-white pt-32 pb-24">
            <div class="max-w-3xl mx-auto px-4 sm:px-6">
                <button
                    on:click=move |_| router.navigate(View::Home, None)
                    class="flex items-center gap-2 text-slate-500 hover:text-red-700 \
                           font-bold transition-colors mb-8"
                >
                    "\u{2190} Back to Home"
                </button>

                {move || {
                    let (heading, paragraphs) = document_for(view_signal.get());
                    view! {
                        <h1 class="text-4xl font-black text-slate-900 uppercase tracking-tighter mb-10">
                            {heading}
                        </h1>
                        <div class="space-y-6">
                            {paragraphs
                                .iter()
                                .map(|p| view! {
                                    <p class="text-slate-600 leading-relaxed">{*p}</p>
                                })
                                .collect_view()}
                        </div>
                    }
                }}
            </div>
        </div>
    }
}

/// Static policy text per legal view; any other view falls back to privacy,
/// though routing never sends one here
fn document_for(view: View) -> (&'static str, &'static [&'static str]) {
    match view {
        View::Terms => (
            "Terms of Service",
            &[
                "Orders placed over WhatsApp or at the counter are confirmed once we \
                 reply with a pickup or delivery time.",
                "Bulk orders above 25 boxes require a 50% advance. The balance is due \
                 on delivery.",
                "Prices on the website menu are indicative; the counter price on the \
                 day of purchase applies.",
            ],
        ),
        View::Refund => (
            "Refund Policy",
            &[
                "Sweets are perishable, so we don't accept returns. If something \
                 reaches you in poor condition, send us a photo within 24 hours and \
                 we will replace it or refund it, your choice.",
                "Advances on cancelled bulk orders are refunded in full up to 72 \
                 hours before the delivery date, and half after that, since by then \
                 the khoya has usually been ordered.",
            ],
        ),
        _ => (
            "Privacy Policy",
            &[
                "This website stores nothing about you. There are no accounts, no \
                 cookies set by us, and no analytics.",
                "If you message us on WhatsApp, your number is used only to fulfil \
                 your order and is never shared.",
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_legal_view_gets_its_own_document() {
        assert_eq!(document_for(View::Privacy).0, "Privacy Policy");
        assert_eq!(document_for(View::Terms).0, "Terms of Service");
        assert_eq!(document_for(View::Refund).0, "Refund Policy");
        // Defensive fallback; unreachable through routing
        assert_eq!(document_for(View::Home).0, "Privacy Policy");
    }
}
