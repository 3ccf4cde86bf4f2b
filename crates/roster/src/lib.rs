//! Camp roster domain: activities, campers and the signups joining them.
//!
//! Field rules live in [`validation`] and run whenever a draft is built or a
//! persisted record is mutated. Client-facing JSON shapes live in [`views`].

pub mod activity;
pub mod camper;
pub mod signup;
pub mod validation;
pub mod views;

pub use activity::{Activity, NewActivity};
pub use camper::{Camper, NewCamper};
pub use signup::{NewSignup, Signup};
pub use views::{
    ActivityDetail, ActivitySignup, ActivitySummary, CamperDetail, CamperSignup, CamperSummary,
    SignupDetail,
};
