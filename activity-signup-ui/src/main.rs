//! Activity Signup Page
//!
//! Browser page for the extracurricular activities backend, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with remaining spots and participant avatars
//! - Signup form with success/error notices
//! - Local-file detection with a hint on how to serve the page
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly and is served by the backend (or `trunk serve`). It talks to
//! the activities API over HTTP and renders the page model from the
//! `activity-signup` crate.

use leptos::*;

mod actions;
mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
