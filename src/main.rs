//! Madhuvan Sweets
//!
//! Single-page marketing site for a Kumaoni sweet shop, built with Leptos (WASM).
//!
//! # Features
//!
//! - Hand-rolled view router synced with the address bar and page metadata
//! - Menu ingestion from a spreadsheet-backed CSV feed
//! - Static sections: story, reviews, featured sweets, gifting, FAQ, contact
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The only network dependency is a single GET to the menu feed;
//! everything else is rendered from static content.

use leptos::*;

mod app;
mod components;
mod config;
mod menu;
mod pages;
mod router;
mod state;
mod view;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
