//! State Management
//!
//! Reactive page state shared through Leptos context.

pub mod page;

pub use page::{current_protocol, provide_page_state, use_page_state, PageState};
