//! Serialized shapes returned to clients.
//!
//! The Camper ↔ Signup ↔ Activity graph is cyclic, so each direction gets its
//! own struct: a nested parent never carries its `signups`, and a signup under
//! a parent never carries a back-reference to that same parent.

use serde::Serialize;

use camp_core::{ActivityId, CamperId, Entity, SignupId};

use crate::{Activity, Camper, Signup};

/// `{id, name, age}`; used for listings and nested campers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperSummary {
    pub id: CamperId,
    pub name: String,
    pub age: i64,
}

impl From<&Camper> for CamperSummary {
    fn from(camper: &Camper) -> Self {
        Self {
            id: camper.id(),
            name: camper.name().to_string(),
            age: camper.age(),
        }
    }
}

/// `{id, name, difficulty}`; used for nested activities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySummary {
    pub id: ActivityId,
    pub name: String,
    pub difficulty: i64,
}

impl From<&Activity> for ActivitySummary {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id(),
            name: activity.name().to_string(),
            difficulty: activity.difficulty(),
        }
    }
}

/// A signup as seen from its camper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperSignup {
    pub id: SignupId,
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
    pub activity: ActivitySummary,
}

impl CamperSignup {
    pub fn new(signup: &Signup, activity: &Activity) -> Self {
        Self {
            id: signup.id(),
            time: signup.time(),
            camper_id: signup.camper_id(),
            activity_id: signup.activity_id(),
            activity: activity.into(),
        }
    }
}

/// A signup as seen from its activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySignup {
    pub id: SignupId,
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
    pub camper: CamperSummary,
}

impl ActivitySignup {
    pub fn new(signup: &Signup, camper: &Camper) -> Self {
        Self {
            id: signup.id(),
            time: signup.time(),
            camper_id: signup.camper_id(),
            activity_id: signup.activity_id(),
            camper: camper.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CamperDetail {
    pub id: CamperId,
    pub name: String,
    pub age: i64,
    pub signups: Vec<CamperSignup>,
}

impl CamperDetail {
    pub fn new(camper: &Camper, signups: Vec<CamperSignup>) -> Self {
        Self {
            id: camper.id(),
            name: camper.name().to_string(),
            age: camper.age(),
            signups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDetail {
    pub id: ActivityId,
    pub name: String,
    pub difficulty: i64,
    pub signups: Vec<ActivitySignup>,
}

impl ActivityDetail {
    pub fn new(activity: &Activity, signups: Vec<ActivitySignup>) -> Self {
        Self {
            id: activity.id(),
            name: activity.name().to_string(),
            difficulty: activity.difficulty(),
            signups,
        }
    }
}

/// A signup with both parents nested, neither carrying its own signups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupDetail {
    pub id: SignupId,
    pub time: i64,
    pub camper_id: CamperId,
    pub activity_id: ActivityId,
    pub camper: CamperSummary,
    pub activity: ActivitySummary,
}

impl SignupDetail {
    pub fn new(signup: &Signup, camper: &Camper, activity: &Activity) -> Self {
        Self {
            id: signup.id(),
            time: signup.time(),
            camper_id: signup.camper_id(),
            activity_id: signup.activity_id(),
            camper: camper.into(),
            activity: activity.into(),
        }
    }
}
