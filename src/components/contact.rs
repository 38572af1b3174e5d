//! Contact Component
//!
//! Shop address, hours and the WhatsApp order shortcut. Anchor target for
//! the `#contact` fragment.

use leptos::*;

use crate::components::whatsapp::open_whatsapp;

/// Contact info section
#[component]
pub fn ContactInfo() -> impl IntoView {
    view! {
        <section id="contact" class="py-24 bg-slate-950 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-12">
                    <div>
                        <h2 class="text-3xl font-black uppercase tracking-tighter mb-6">
                            "Find Us"
                        </h2>
                        <p class="text-slate-400 leading-relaxed">
                            "Madhuvan Sweets" <br/>
                            "Shop 12, Nainital Road" <br/>
                            "Haldwani, Uttarakhand 263139"
                        </p>
                    </div>

                    <div>
                        <h3 class="text-sm font-black uppercase tracking-widest text-red-400 mb-6">
                            "Hours"
                        </h3>
                        <p class="text-slate-400 leading-relaxed">
                            "Open every day" <br/>
                            "8:00 AM - 9:30 PM" <br/>
                            "Jalebi counter from 8:00 AM"
                        </p>
                    </div>

                    <div>
                        <h3 class="text-sm font-black uppercase tracking-widest text-red-400 mb-6">
                            "Order Ahead"
                        </h3>
                        <button
                            on:click=|_| open_whatsapp(Some("Namaste! I'd like to place an order."))
                            class="bg-green-500 hover:bg-green-600 text-white px-8 py-4 \
                                   rounded-full font-black transition-all"
                        >
                            "WhatsApp Us"
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
