use crate::modules::activities::adapters::outbound::roster_store_in_memory::InMemoryRosterStore;
use crate::modules::activities::core::state::Activity;
use crate::shared::core::email::Email;

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity {
                name: "Chess Club".to_string(),
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: Vec::new(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn max_participants(mut self, v: usize) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants<'a>(mut self, v: impl IntoIterator<Item = &'a str>) -> Self {
        self.inner.participants = v
            .into_iter()
            .map(|raw| Email::parse(raw).unwrap())
            .collect();
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}

pub fn chess_club() -> Activity {
    ActivityBuilder::new()
        .participants(["michael@mergington.edu", "daniel@mergington.edu"])
        .build()
}

pub fn art_club() -> Activity {
    ActivityBuilder::new()
        .name("Art Club")
        .max_participants(15)
        .participants(["amelia@mergington.edu"])
        .build()
}

pub fn make_store() -> InMemoryRosterStore {
    InMemoryRosterStore::with_activities([chess_club(), art_club()])
}
