//! WhatsApp Deep Link
//!
//! Fire-and-forget chat link plus the floating order button.

use leptos::*;

use crate::config;

/// Open the shop's WhatsApp chat in a new tab, optionally pre-filling a
/// URL-encoded message.
pub fn open_whatsapp(message: Option<&str>) {
    let mut url = format!("https://wa.me/{}", config::WHATSAPP_NUMBER);
    if let Some(message) = message {
        let encoded = js_sys::encode_uri_component(message);
        url.push_str("?text=");
        url.push_str(&String::from(encoded));
    }

    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(&url, "_blank");
    }
}

/// Floating chat button pinned to the bottom-right corner
#[component]
pub fn FloatingWhatsApp() -> impl IntoView {
    view! {
        <div class="fixed bottom-8 right-8 z-50">
            <button
                on:click=|_| open_whatsapp(None)
                aria-label="Chat with us on WhatsApp for orders"
                class="bg-green-500 hover:bg-green-600 text-white w-16 h-16 rounded-full \
                       shadow-2xl flex items-center justify-center text-2xl \
                       hover:scale-105 transition-all"
            >
                "\u{1F4AC}"
            </button>
        </div>
    }
}
