use serde::Deserialize;

use crate::error::Error;

/// Inbound send request, as posted by clients.
///
/// Required fields are modeled as `Option` so that a missing value surfaces
/// as a validation error from the service itself rather than a
/// deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct EmailRequest {
    pub to: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    pub attachments: Option<Vec<Attachment>>,
}

/// A single attachment, as posted by clients
#[derive(Debug, Deserialize)]
pub struct Attachment {
    /// Attachment filename
    pub filename: String,

    /// Base64-encoded file content
    pub content: String,

    /// MIME type of attachment (e.g., text/plain)
    #[serde(rename = "contentType")]
    pub content_type: String,
}

/// A validated email, ready for message construction
#[derive(Debug)]
pub struct Email {
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attachments: Vec<Attachment>,
}

/// An attachment decoded into raw bytes
#[derive(Debug)]
pub struct DecodedAttachment {
    pub data: Vec<u8>,
    pub content_type: String,
    pub name: String,
    pub size: usize,
}

impl EmailRequest {
    /// Checks that all required fields are present and non-empty, and
    /// converts the request into the internal `Email` representation.
    pub fn validate(self) -> Result<Email, Error> {
        let to = self.to.filter(|s| !s.is_empty());
        let subject = self.subject.filter(|s| !s.is_empty());
        let body = self.body.filter(|s| !s.is_empty());

        match (to, subject, body) {
            (Some(to), Some(subject), Some(body)) => Ok(Email {
                recipient: to,
                subject,
                body,
                attachments: self.attachments.unwrap_or_default(),
            }),
            _ => Err(Error::MissingFields),
        }
    }
}

impl Attachment {
    /// Decodes the base64 content into raw bytes.
    pub fn decode(&self) -> Result<DecodedAttachment, Error> {
        let data = base64::decode(&self.content)
            .map_err(|e| Error::Decode(format!("{}: {}", self.filename, e)))?;
        let size = data.len();

        Ok(DecodedAttachment {
            data,
            content_type: self.content_type.clone(),
            name: self.filename.clone(),
            size,
        })
    }
}
