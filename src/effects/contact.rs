use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    /// Presence check only; blank-after-trim counts as missing.
    pub fn validate(&self) -> Result<(), ContactError> {
        let missing = [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty());
        if missing {
            Err(ContactError::MissingFields)
        } else {
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
}

impl SubmitState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Idle => "Send Message",
            SubmitState::Sending => "Sending...",
        }
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitState::Sending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> ContactDraft {
        ContactDraft {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn complete_draft_passes() {
        assert_eq!(draft("Ada", "ada@example.com", "Hello").validate(), Ok(()));
    }

    #[test]
    fn any_missing_field_fails_with_one_message() {
        for d in [
            draft("", "ada@example.com", "Hello"),
            draft("Ada", "", "Hello"),
            draft("Ada", "ada@example.com", "   "),
            ContactDraft::default(),
        ] {
            let err = d.validate().unwrap_err();
            assert_eq!(err.to_string(), "Please fill in all fields");
        }
    }

    #[test]
    fn submit_labels() {
        assert_eq!(SubmitState::Idle.label(), "Send Message");
        assert_eq!(SubmitState::Sending.label(), "Sending...");
        assert!(SubmitState::Sending.is_sending());
    }
}
