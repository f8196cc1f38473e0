//! Message routing
//!
//! Everything the caller supplies at construction time that is not rendered
//! content: sender, recipients and extra headers.

use crate::message::Headers;
use lettre::message::Mailbox;

#[derive(Debug, Clone, Default)]
pub struct Envelope {
    pub from: Option<Mailbox>,
    pub reply_to: Option<Mailbox>,
    pub to: Vec<Mailbox>,
    pub cc: Vec<Mailbox>,
    pub bcc: Vec<Mailbox>,
    /// Caller-supplied headers. Merged with the view's own headers when a
    /// message is rendered; on collision the view's value is kept.
    pub headers: Headers,
}

impl Envelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_address(mut self, mailbox: Mailbox) -> Self {
        self.from = Some(mailbox);
        self
    }

    pub fn reply_to(mut self, mailbox: Mailbox) -> Self {
        self.reply_to = Some(mailbox);
        self
    }

    pub fn to(mut self, mailbox: Mailbox) -> Self {
        self.to.push(mailbox);
        self
    }

    pub fn cc(mut self, mailbox: Mailbox) -> Self {
        self.cc.push(mailbox);
        self
    }

    pub fn bcc(mut self, mailbox: Mailbox) -> Self {
        self.bcc.push(mailbox);
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_recipients() {
        let envelope = Envelope::new()
            .from_address("sender@example.com".parse().unwrap())
            .to("one@example.com".parse().unwrap())
            .to("two@example.com".parse().unwrap())
            .header("References", "<1@example.com>");

        assert_eq!(envelope.to.len(), 2);
        assert!(envelope.from.is_some());
        assert_eq!(envelope.headers.get("References"), Some("<1@example.com>"));
    }
}
