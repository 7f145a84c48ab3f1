//! # Activity Signup
//!
//! Client for an extracurricular activities backend: list the activities,
//! render them as cards, and sign a student up for one.
//!
//! ## Features
//!
//! - **Ordered catalog**: activities are shown in the order the server sends them
//! - **Derived fields**: remaining spots and participant initials
//! - **Signup notices**: success/error notices that hide after five seconds,
//!   with the latest notice always winning
//! - **Two front-ends**: a terminal CLI (feature `native`) and a Leptos
//!   browser page (`activity-signup-ui/`) sharing this model
//!
//! ## Modules
//!
//! - [`model`]: wire types and pure derivations
//! - [`view`]: the page view-model both front-ends render
//! - [`endpoints`]: request targets and percent-encoding
//! - [`origin`]: servable-origin check
//! - [`client`]: reqwest transport (native)
//! - [`portal`]: async lister and submitter (native)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activity_signup::{HttpActivityClient, PageOrigin, Portal};
//!
//! #[tokio::main]
//! async fn main() {
//!     let portal = Portal::new(HttpActivityClient::new("http://localhost:8000"));
//!     portal.start(PageOrigin::Network).await;
//!
//!     portal.fill_form("emma@mergington.edu", "Chess Club").await;
//!     let outcome = portal.submit_signup().await;
//!     println!("{}", outcome.text());
//! }
//! ```

pub mod endpoints;
pub mod error;
pub mod model;
pub mod origin;
pub mod view;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod portal;
#[cfg(feature = "native")]
pub mod render;

// Re-export top-level types for convenience
pub use error::{ClientError, ClientResult};

pub use model::{
    initials, ActivityCatalog, ActivityRecord, SignupOutcome, SignupReply, SignupRequest,
    SignupResponse,
};

pub use origin::PageOrigin;

pub use view::{
    ActivityCard, Diagnostic, ListRegion, Notice, NoticeBoard, NoticeKind, NoticeTicket, Page,
    Roster, SignupForm, NOTICE_TIMEOUT,
};

#[cfg(feature = "native")]
pub use client::{ActivityApi, HttpActivityClient, DEFAULT_API_BASE};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LogFormat};

#[cfg(feature = "native")]
pub use portal::{NoticeTimer, Portal, SharedPage};
