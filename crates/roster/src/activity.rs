use camp_core::{ActivityId, Entity};

/// An activity that has not been stored yet.
///
/// Activities carry no field rules; they are only ever inserted directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewActivity {
    pub name: String,
    pub difficulty: i64,
}

impl NewActivity {
    pub fn new(name: impl Into<String>, difficulty: i64) -> Self {
        Self {
            name: name.into(),
            difficulty,
        }
    }

    pub fn into_activity(self, id: ActivityId) -> Activity {
        Activity {
            id,
            name: self.name,
            difficulty: self.difficulty,
        }
    }
}

/// A stored activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    id: ActivityId,
    name: String,
    difficulty: i64,
}

impl Activity {
    pub fn restore(id: ActivityId, name: String, difficulty: i64) -> Self {
        Self {
            id,
            name,
            difficulty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn difficulty(&self) -> i64 {
        self.difficulty
    }
}

impl Entity for Activity {
    type Id = ActivityId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
