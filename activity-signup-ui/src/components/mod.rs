//! UI Components
//!
//! Leptos components for the activities page.

pub mod activity_card;
pub mod activity_list;
pub mod notice;
pub mod serve_tip;
pub mod signup_form;

pub use activity_list::ActivityList;
pub use notice::NoticeBanner;
pub use serve_tip::ServeTip;
pub use signup_form::SignupForm;
