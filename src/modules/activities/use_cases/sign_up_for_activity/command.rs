use crate::shared::core::email::Email;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForActivity {
    pub activity_name: String,
    pub email: Email,
}

/// Returned to the caller once the participant has been appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpConfirmation {
    pub activity_name: String,
    pub email: Email,
}

impl SignUpConfirmation {
    pub fn message(&self) -> String {
        format!("Signed up {} for {}", self.email, self.activity_name)
    }
}
