/// All possible Courier library errors
#[derive(Debug)]
pub enum Error {
    /// One or more required request fields are absent or empty
    MissingFields,
    /// An attachment could not be decoded
    Decode(String),
    /// The outbound message could not be constructed
    Message(String),
    /// The SMTP transport could not be built, or the send failed
    Transport(String),
    /// The transport configuration is structurally invalid
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::MissingFields => write!(f, "Missing required fields: to, subject, body"),
            Error::Decode(ref msg) => write!(f, "Decode: {}", msg),
            Error::Message(ref msg) => write!(f, "Message: {}", msg),
            Error::Transport(ref msg) => write!(f, "Transport: {}", msg),
            Error::Config(ref msg) => write!(f, "Config: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<lettre::smtp::error::Error> for Error {
    fn from(err: lettre::smtp::error::Error) -> Self {
        Error::Transport(err.to_string())
    }
}

impl From<lettre_email::error::Error> for Error {
    fn from(err: lettre_email::error::Error) -> Self {
        Error::Message(err.to_string())
    }
}
