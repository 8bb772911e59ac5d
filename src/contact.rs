use serde::{Deserialize, Serialize};

/// The only message a failed submission ever shows, whatever went wrong.
pub const SEND_FAILED: &str = "Failed to send message. Please try again or contact directly.";

/// How long the "sent" confirmation stays up after a successful submission.
pub const CONFIRMATION_MS: f64 = 3000.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "your@email.com",
            Self::Subject => "What's this about?",
            Self::Message => "Tell me about your project...",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

impl ContactMessage {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactMessage,
    pub submitting: bool,
    pub submitted: bool,
    pub error: Option<&'static str>,
}

impl ContactForm {
    pub fn set(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
    }

    /// Marks the form as in flight and hands back what should be sent.
    ///
    /// Nothing prevents a second call before the first one finishes; each
    /// call produces its own snapshot.
    pub fn begin_submit(&mut self) -> ContactMessage {
        self.submitting = true;
        self.error = None;
        self.fields.clone()
    }

    /// Applies the relay outcome. Returns `true` when the confirmation timer
    /// should be started.
    pub fn finish<E>(&mut self, outcome: &Result<(), E>) -> bool {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                self.submitted = true;
                self.fields = ContactMessage::default();
                true
            }
            Err(_) => {
                self.error = Some(SEND_FAILED);
                false
            }
        }
    }

    pub fn clear_confirmation(&mut self) {
        self.submitted = false;
    }

    pub fn button_label(&self) -> &'static str {
        if self.submitting {
            "Sending..."
        } else if self.submitted {
            "Message Sent! 🎉"
        } else {
            "Send Message"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ada".to_string());
        form.set(Field::Email, "ada@example.com".to_string());
        form.set(Field::Subject, "Hello".to_string());
        form.set(Field::Message, "Let's build something".to_string());
        form
    }

    #[test]
    fn test_begin_submit_snapshots_all_fields() {
        let mut form = filled();
        form.error = Some(SEND_FAILED);
        let msg = form.begin_submit();
        assert!(form.submitting);
        assert_eq!(form.error, None);
        assert_eq!(
            msg,
            ContactMessage {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Hello".to_string(),
                message: "Let's build something".to_string(),
            }
        );
        assert_eq!(form.button_label(), "Sending...");
    }

    #[test]
    fn test_failure_keeps_fields_and_shows_error() {
        let mut form = filled();
        let before = form.fields.clone();
        form.begin_submit();
        let start_timer = form.finish(&Err::<(), _>("connection reset"));
        assert!(!start_timer);
        assert!(!form.submitting);
        assert!(!form.submitted);
        assert_eq!(form.fields, before);
        assert_eq!(form.error, Some(SEND_FAILED));
        assert_eq!(form.button_label(), "Send Message");
    }

    #[test]
    fn test_success_clears_fields_until_timeout() {
        let mut form = filled();
        form.begin_submit();
        let start_timer = form.finish(&Ok::<(), ()>(()));
        assert!(start_timer);
        assert_eq!(form.fields, ContactMessage::default());
        assert!(form.submitted);
        assert_eq!(form.button_label(), "Message Sent! 🎉");

        form.clear_confirmation();
        assert!(!form.submitted);
        assert_eq!(form.button_label(), "Send Message");
    }

    #[test]
    fn test_new_submission_clears_previous_error() {
        let mut form = filled();
        form.begin_submit();
        form.finish(&Err::<(), _>(()));
        assert!(form.error.is_some());
        form.begin_submit();
        assert!(form.error.is_none());
    }

    #[test]
    fn test_field_accessors_match() {
        let form = filled();
        for field in Field::ALL {
            assert!(!form.fields.get(field).is_empty());
        }
        assert_eq!(form.fields.get(Field::Subject), "Hello");
        assert_eq!(Field::Email.input_type(), "email");
        assert!(Field::Message.is_multiline());
        assert!(!Field::Name.is_multiline());
    }
}
