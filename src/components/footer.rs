//! Footer Component
//!
//! Footer link columns, all routed through the view router.

use leptos::*;

use crate::router::RouterHandle;
use crate::view::View;

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-slate-950 border-t border-white/5 text-white py-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12 mb-12">
                    <div>
                        <p class="text-xl font-black uppercase tracking-tight mb-4">
                            "Madhuvan Sweets"
                        </p>
                        <p class="text-slate-500 text-sm leading-relaxed">
                            "Kumaoni sweets made fresh every morning in Haldwani, since 2009."
                        </p>
                    </div>

                    <div>
                        <h4 class="text-xs font-black uppercase tracking-widest text-slate-500 mb-4">
                            "Explore"
                        </h4>
                        <div class="flex flex-col gap-2">
                            <FooterLink label="Our Story" view=View::Story />
                            <FooterLink label="Full Menu" view=View::FullMenu />
                            <FooterLink label="Gifting & Bulk" view=View::Gifting />
                        </div>
                    </div>

                    <div>
                        <h4 class="text-xs font-black uppercase tracking-widest text-slate-500 mb-4">
                            "The Fine Print"
                        </h4>
                        <div class="flex flex-col gap-2">
                            <FooterLink label="Privacy Policy" view=View::Privacy />
                            <FooterLink label="Terms of Service" view=View::Terms />
                            <FooterLink label="Refund Policy" view=View::Refund />
                        </div>
                    </div>
                </div>

                <p class="text-slate-600 text-xs text-center">
                    "\u{00A9} 2026 Madhuvan Sweets, Haldwani. All rights reserved."
                </p>
            </div>
        </footer>
    }
}

/// Individual footer link
#[component]
fn FooterLink(label: &'static str, view: View) -> impl IntoView {
    let router = use_context::<RouterHandle>().expect("RouterHandle not found");

    view! {
        <button
            on:click=move |_| router.navigate(view, None)
            class="text-left text-slate-400 hover:text-white text-sm transition-colors"
        >
            {label}
        </button>
    }
}
