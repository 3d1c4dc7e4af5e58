mod file;
pub mod smtp;

pub use file::FileTransport;
pub use smtp::{SmtpTransport, TlsConfig};

use crate::{Email, MailerError};
use lettre::Message;

/// Build a lettre message from a transport-agnostic [`Email`].
pub(crate) fn build_message(email: Email) -> Result<Message, MailerError> {
    let mut message_builder = Message::builder()
        .from(email.from.parse()?)
        .to(email.to.parse()?)
        .subject(email.subject);

    if let Some(reply_to) = email.reply_to {
        message_builder = message_builder.reply_to(reply_to.parse()?);
    }

    // Prefer multipart when both bodies are present.
    let message = if let Some(html) = email.html_body {
        if let Some(text) = email.text_body {
            message_builder.multipart(
                lettre::message::MultiPart::alternative()
                    .singlepart(lettre::message::SinglePart::plain(text))
                    .singlepart(lettre::message::SinglePart::html(html)),
            )?
        } else {
            message_builder
                .header(lettre::message::header::ContentType::TEXT_HTML)
                .body(html)?
        }
    } else if let Some(text) = email.text_body {
        message_builder.body(text)?
    } else {
        return Err(MailerError::Builder("No email body provided".to_string()));
    };

    Ok(message)
}
