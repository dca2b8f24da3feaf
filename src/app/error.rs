use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to fetch {target}: {source}")]
    Fetch { target: String, source: BoxError },

    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Error decoding XML from {target}: {reason}")]
    XmlDecode { target: String, reason: String },

    #[error("Unknown feed type for {target} (root element <{root}>)")]
    UnknownFeedType { target: String, root: String },

    #[error("CSS selector {0} not found")]
    SelectorNotFound(String),

    #[error("Invalid CSS selector {selector}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Error sanitizing HTML: {0}")]
    Sanitize(String),

    #[error("Error converting HTML to Markdown: {0}")]
    MarkdownConversion(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Unsupported output file type: {0}")]
    UnsupportedOutputType(String),

    #[error("Error writing PDF: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ExportError {
    pub fn fetch(target: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Fetch {
            target: target.into(),
            source: source.into(),
        }
    }

    pub fn xml_decode(target: impl Into<String>, reason: impl ToString) -> Self {
        Self::XmlDecode {
            target: target.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
