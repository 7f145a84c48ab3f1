//! Data model
//!
//! Wire types for the activities API and the pure derivations the page needs
//! (remaining capacity, participant initials, signup outcome).

mod catalog;
mod participant;
mod signup;

pub use catalog::{ActivityCatalog, ActivityRecord};
pub use participant::{initials, INITIALS_LEN};
pub use signup::{
    SignupOutcome, SignupReply, SignupRequest, SignupResponse, FALLBACK_ERROR_DETAIL,
    SIGNUP_FAILED_MESSAGE,
};
