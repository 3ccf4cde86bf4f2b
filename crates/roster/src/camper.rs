use camp_core::{CamperId, DomainResult, Entity};

use crate::validation::{validate_age, validate_name};

/// A camper that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamper {
    name: String,
    age: i64,
}

impl NewCamper {
    /// Validates `name` first, then `age`.
    pub fn new(name: impl Into<String>, age: i64) -> DomainResult<Self> {
        let name = name.into();
        validate_name(&name)?;
        let age = validate_age(age)?;
        Ok(Self { name, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn into_camper(self, id: CamperId) -> Camper {
        Camper {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

/// A stored camper.
///
/// Setters validate at assignment and leave the record untouched on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Camper {
    id: CamperId,
    name: String,
    age: i64,
}

impl Camper {
    /// Rebuild a camper from a committed row. No rules are re-run.
    pub fn restore(id: CamperId, name: String, age: i64) -> Self {
        Self { id, name, age }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_age(&mut self, age: i64) -> DomainResult<()> {
        self.age = validate_age(age)?;
        Ok(())
    }
}

impl Entity for Camper {
    type Id = CamperId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{AGE_OUT_OF_RANGE, NAME_REQUIRED};
    use camp_core::DomainError;

    #[test]
    fn new_camper_accepts_valid_fields() {
        let draft = NewCamper::new("Alex", 12).unwrap();
        let camper = draft.into_camper(CamperId::new(1));
        assert_eq!(camper.id(), CamperId::new(1));
        assert_eq!(camper.name(), "Alex");
        assert_eq!(camper.age(), 12);
    }

    #[test]
    fn name_rule_is_checked_before_age() {
        let err = NewCamper::new("", 40).unwrap_err();
        assert_eq!(err, DomainError::validation(NAME_REQUIRED));
    }

    #[test]
    fn age_rule_rejects_out_of_range() {
        let err = NewCamper::new("Alex", 7).unwrap_err();
        assert_eq!(err.to_string(), AGE_OUT_OF_RANGE);
    }

    #[test]
    fn failed_assignment_leaves_camper_unchanged() {
        let mut camper = Camper::restore(CamperId::new(3), "Sam".into(), 10);
        assert!(camper.set_name("").is_err());
        assert!(camper.set_age(30).is_err());
        assert_eq!(camper, Camper::restore(CamperId::new(3), "Sam".into(), 10));

        camper.set_name("Sammy").unwrap();
        camper.set_age(11).unwrap();
        assert_eq!(camper.name(), "Sammy");
        assert_eq!(camper.age(), 11);
    }
}
