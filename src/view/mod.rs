//! Page view-model
//!
//! Front-end independent description of what the page shows.

mod card;
mod notice;
mod page;

pub use card::{ActivityCard, ParticipantItem, Roster, NO_PARTICIPANTS_TEXT};
pub use notice::{Notice, NoticeBoard, NoticeKind, NoticeTicket, NOTICE_TIMEOUT};
pub use page::{
    Diagnostic, ListRegion, Page, SignupForm, CATALOG_UNAVAILABLE_MESSAGE, LOADING_TEXT,
    SELECT_PLACEHOLDER,
};
