use crate::shared::core::email::Email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Signup order. No two entries share a comparison key.
    pub participants: Vec<Email>,
}

impl Activity {
    pub fn is_signed_up(&self, email: &Email) -> bool {
        self.participants.iter().any(|p| p.is_same_address(email))
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }
}
