//! Sending
//!
//! Thin wrapper over a lettre transport. `send` is a convenience: it goes
//! through [`MessageView::render_to_message`] and nothing else, so a view
//! that customizes message construction customizes sending too.

use crate::error::{BoxError, MailviewError, Result};
use crate::message::{Context, Envelope, MessageView};
use lettre::AsyncTransport;
use tracing::debug;

#[derive(Clone)]
pub struct Mailer<T> {
    transport: T,
}

impl<T> Mailer<T>
where
    T: AsyncTransport + Sync,
    <T as AsyncTransport>::Error: Into<BoxError>,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Renders a view and hands the message to the transport, returning
    /// the transport's result.
    pub async fn send<V>(
        &self,
        view: &V,
        extra_context: Context,
        envelope: Envelope,
    ) -> Result<<T as AsyncTransport>::Ok>
    where
        V: MessageView + ?Sized,
    {
        let rendered = view.render_to_message(extra_context, envelope)?;
        let message = rendered.to_lettre()?;

        debug!(subject = %rendered.subject(), "sending rendered message");
        self.transport
            .send(message)
            .await
            .map_err(|err| MailviewError::Transport(err.into()))
    }
}
