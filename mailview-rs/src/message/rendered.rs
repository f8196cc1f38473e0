//! Rendered messages
//!
//! The transport-ready product of a message view: rendered subject and
//! body, merged headers, routing, and at most one attached alternative
//! part. Immutable once built apart from [`RenderedMessage::attach_alternative`].

use crate::error::{MailviewError, Result};
use crate::message::{Envelope, Headers};
use lettre::message::header::{ContentType, HeaderName, HeaderValue};
use lettre::message::{MultiPart, SinglePart};
use lettre::Message;

pub const TEXT_HTML: &str = "text/html";

/// An alternative representation of the message body, tagged with its
/// MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    pub content: String,
    pub mimetype: String,
}

#[derive(Debug, Clone)]
pub struct RenderedMessage {
    subject: String,
    body: String,
    alternative: Option<Alternative>,
    headers: Headers,
    envelope: Envelope,
}

impl RenderedMessage {
    /// Builds a message from rendered content. `headers` carries the
    /// view-level headers; caller-supplied headers from the envelope are
    /// layered in only for names the view did not set, so on collision the
    /// view's value is preserved.
    pub fn new(subject: String, body: String, headers: Headers, envelope: Envelope) -> Self {
        let mut envelope = envelope;
        let mut headers = headers;
        for (name, value) in std::mem::take(&mut envelope.headers) {
            if !headers.contains(&name) {
                headers.insert(name, value);
            }
        }

        Self {
            subject,
            body,
            alternative: None,
            headers,
            envelope,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn alternative(&self) -> Option<&Alternative> {
        self.alternative.as_ref()
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    /// Attaches an alternative body representation. The only mutation a
    /// rendered message supports.
    pub fn attach_alternative(&mut self, content: impl Into<String>, mimetype: impl Into<String>) {
        self.alternative = Some(Alternative {
            content: content.into(),
            mimetype: mimetype.into(),
        });
    }

    /// Assembles the final [`lettre::Message`]. Routing that lettre
    /// requires but the envelope lacks (a From address, at least one
    /// recipient) surfaces as [`MailviewError::Message`].
    pub fn to_lettre(&self) -> Result<Message> {
        let mut builder = Message::builder();

        if let Some(from) = &self.envelope.from {
            builder = builder.from(from.clone());
        }
        if let Some(reply_to) = &self.envelope.reply_to {
            builder = builder.reply_to(reply_to.clone());
        }
        for mailbox in &self.envelope.to {
            builder = builder.to(mailbox.clone());
        }
        for mailbox in &self.envelope.cc {
            builder = builder.cc(mailbox.clone());
        }
        for mailbox in &self.envelope.bcc {
            builder = builder.bcc(mailbox.clone());
        }
        builder = builder.subject(self.subject.clone());

        let mut message = match &self.alternative {
            Some(alternative) if alternative.mimetype == TEXT_HTML => builder.multipart(
                MultiPart::alternative_plain_html(
                    self.body.clone(),
                    alternative.content.clone(),
                ),
            )?,
            Some(alternative) => {
                let content_type = ContentType::parse(&alternative.mimetype)
                    .map_err(|_| MailviewError::InvalidHeader(alternative.mimetype.clone()))?;
                builder.multipart(
                    MultiPart::alternative()
                        .singlepart(SinglePart::plain(self.body.clone()))
                        .singlepart(
                            SinglePart::builder()
                                .header(content_type)
                                .body(alternative.content.clone()),
                        ),
                )?
            }
            None => builder.body(self.body.clone())?,
        };

        for (name, value) in self.headers.iter() {
            let header_name = HeaderName::new_from_ascii(name.to_string())
                .map_err(|_| MailviewError::InvalidHeader(name.to_string()))?;
            message
                .headers_mut()
                .insert_raw(HeaderValue::new(header_name, value.to_string()));
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope() -> Envelope {
        Envelope::new()
            .from_address("sender@example.com".parse().unwrap())
            .to("recipient@example.com".parse().unwrap())
    }

    #[test]
    fn test_view_headers_win_on_collision() {
        let mut view_headers = Headers::new();
        view_headers.insert("Reply-To", "view@example.com");

        let envelope = envelope()
            .header("Reply-To", "caller@example.com")
            .header("References", "<1@example.com>");

        let message =
            RenderedMessage::new("subject".into(), "body".into(), view_headers, envelope);

        assert_eq!(message.headers().get("Reply-To"), Some("view@example.com"));
        assert_eq!(message.headers().get("References"), Some("<1@example.com>"));
    }

    #[test]
    fn test_to_lettre_plain() {
        let message = RenderedMessage::new(
            "subject".into(),
            "body".into(),
            Headers::new(),
            envelope(),
        );

        let formatted = message.to_lettre().unwrap().formatted();
        let raw = String::from_utf8(formatted).unwrap();
        assert!(raw.contains("Subject: subject"));
        assert!(raw.contains("body"));
    }

    #[test]
    fn test_to_lettre_missing_from_fails() {
        let message = RenderedMessage::new(
            "subject".into(),
            "body".into(),
            Headers::new(),
            Envelope::new().to("recipient@example.com".parse().unwrap()),
        );

        assert!(matches!(
            message.to_lettre(),
            Err(MailviewError::Message(_))
        ));
    }

    #[test]
    fn test_to_lettre_multipart_html() {
        let mut message = RenderedMessage::new(
            "subject".into(),
            "plain body".into(),
            Headers::new(),
            envelope(),
        );
        message.attach_alternative("<p>html body</p>", TEXT_HTML);

        let formatted = message.to_lettre().unwrap().formatted();
        let raw = String::from_utf8(formatted).unwrap();
        assert!(raw.contains("multipart/alternative"));
        assert!(raw.contains("plain body"));
        assert!(raw.contains("<p>html body</p>"));
    }

    #[test]
    fn test_custom_headers_reach_the_wire() {
        let mut headers = Headers::new();
        headers.insert("X-Campaign", "spring");

        let message =
            RenderedMessage::new("subject".into(), "body".into(), headers, envelope());

        let formatted = message.to_lettre().unwrap().formatted();
        let raw = String::from_utf8(formatted).unwrap();
        assert!(raw.contains("X-Campaign: spring"));
    }
}
