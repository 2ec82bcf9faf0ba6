use lettre::smtp::authentication::Credentials;
use lettre::smtp::client::net::ClientTlsParameters;
use lettre::smtp::extension::ClientId;
use lettre::smtp::ClientSecurity;
use lettre::{SendableEmail, SmtpClient, SmtpTransport, Transport};
use lettre_email::Mailbox;

use crate::config::SmtpConfig;
use crate::email::Email;
use crate::error::Error;

/// All outbound mail is delivered to this address, regardless of the
/// recipient supplied in the request. The caller's recipient is accepted
/// and logged, but never used for delivery. Inherited from the system this
/// relay replaces; kept as an explicit constant instead of silently
/// honoring the caller's input.
pub const FIXED_RECIPIENT: &str = "salshaiban@alkhorayef.com";

/// Display name used in the From header
pub const SENDER_NAME: &str = "Courier";

/// Builds a ready-to-use SMTP transport from the given settings.
///
/// No connection is opened here; the send that follows opens and closes its
/// own session. Fails if the settings are structurally invalid or the
/// client cannot be constructed.
pub fn transport(config: &SmtpConfig) -> Result<SmtpTransport, Error> {
    if config.host.is_empty() {
        return Err(Error::Config("SMTP host is not set".to_string()));
    }

    let security = if config.secure {
        let connector = native_tls::TlsConnector::new()
            .map_err(|e| Error::Transport(e.to_string()))?;

        ClientSecurity::Wrapper(ClientTlsParameters::new(config.host.clone(), connector))
    } else {
        ClientSecurity::None
    };

    let client = SmtpClient::new((config.host.as_str(), config.port), security)?
        .hello_name(ClientId::hostname())
        .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
        .smtp_utf8(true);

    Ok(client.transport())
}

/// Converts a plain-text body into its HTML variant
fn html_body(body: &str) -> String {
    body.replace('\n', "<br>")
}

/// Builds the outbound message for a validated send request.
///
/// The envelope recipient is always `FIXED_RECIPIENT`. The plain-text body
/// is carried as-is, alongside an HTML alternative with newlines converted
/// to line-break markup. Attachments are decoded from base64 and attached
/// in request order.
pub fn build_message(mail: &Email, config: &SmtpConfig) -> Result<SendableEmail, Error> {
    let from = Mailbox::new_with_name(SENDER_NAME.to_string(), config.user.clone());

    let mut builder = lettre_email::Email::builder()
        .to(FIXED_RECIPIENT)
        .from(from)
        .subject(mail.subject.as_str())
        .alternative(html_body(&mail.body), mail.body.as_str());

    for attachment in &mail.attachments {
        let decoded = attachment.decode()?;

        let mime = decoded.content_type.parse::<mime::Mime>().map_err(|_| {
            Error::Decode(format!(
                "{}: invalid content type \"{}\"",
                decoded.name, decoded.content_type
            ))
        })?;

        builder = builder.attachment(&decoded.data, &decoded.name, &mime)?;
    }

    Ok(builder.build()?.into())
}

/// Builds the fixed connectivity-probe message, sent from the configured
/// account to itself.
pub fn build_test_message(config: &SmtpConfig) -> Result<SendableEmail, Error> {
    let email = lettre_email::Email::builder()
        .to(config.user.as_str())
        .from(config.user.as_str())
        .subject("Courier test email")
        .alternative(
            "<h1>Test Email</h1><p>This is a test email. If you received this, \
             your email server is working!</p>",
            "This is a test email. If you received this, your email server is working!",
        )
        .build()?;

    Ok(email.into())
}

/// Sends a message through a fresh transport built from `config`.
///
/// Blocking: opens an SMTP session and waits for the server's outcome.
/// Returns the identifier of the submitted message.
pub fn send(config: &SmtpConfig, email: SendableEmail) -> Result<String, Error> {
    let message_id = email.message_id().to_string();

    let mut mailer = transport(config)?;

    log::debug!("Sending message {} via {}:{}", message_id, config.host, config.port);

    mailer.send(email)?;

    Ok(message_id)
}
