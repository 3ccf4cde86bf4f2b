use camp_core::{ActivityId, CamperId, DomainResult, Entity, SignupId};

use crate::validation::validate_time;

/// A signup that has passed validation but has not been stored yet.
///
/// Whether `camper_id` and `activity_id` exist is up to the store's foreign
/// keys, not this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewSignup {
    camper_id: CamperId,
    activity_id: ActivityId,
    time: i64,
}

impl NewSignup {
    pub fn new(camper_id: CamperId, activity_id: ActivityId, time: i64) -> DomainResult<Self> {
        let time = validate_time(time)?;
        Ok(Self {
            camper_id,
            activity_id,
            time,
        })
    }

    pub fn camper_id(&self) -> CamperId {
        self.camper_id
    }

    pub fn activity_id(&self) -> ActivityId {
        self.activity_id
    }

    pub fn time(&self) -> i64 {
        self.time
    }

    pub fn into_signup(self, id: SignupId) -> Signup {
        Signup {
            id,
            camper_id: self.camper_id,
            activity_id: self.activity_id,
            time: self.time,
        }
    }
}

/// A stored signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signup {
    id: SignupId,
    camper_id: CamperId,
    activity_id: ActivityId,
    time: i64,
}

impl Signup {
    pub fn restore(id: SignupId, camper_id: CamperId, activity_id: ActivityId, time: i64) -> Self {
        Self {
            id,
            camper_id,
            activity_id,
            time,
        }
    }

    pub fn camper_id(&self) -> CamperId {
        self.camper_id
    }

    pub fn activity_id(&self) -> ActivityId {
        self.activity_id
    }

    pub fn time(&self) -> i64 {
        self.time
    }
}

impl Entity for Signup {
    type Id = SignupId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::INVALID_HOUR;

    #[test]
    fn hour_outside_day_is_rejected() {
        let err = NewSignup::new(CamperId::new(1), ActivityId::new(1), 25).unwrap_err();
        assert_eq!(err.to_string(), INVALID_HOUR);
    }

    #[test]
    fn stored_signup_keeps_references() {
        let signup = NewSignup::new(CamperId::new(2), ActivityId::new(5), 9)
            .unwrap()
            .into_signup(SignupId::new(11));
        assert_eq!(signup.id(), SignupId::new(11));
        assert_eq!(signup.camper_id(), CamperId::new(2));
        assert_eq!(signup.activity_id(), ActivityId::new(5));
        assert_eq!(signup.time(), 9);
    }
}
