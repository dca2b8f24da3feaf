use std::fmt;
use std::str::FromStr;

use crate::app::ExportError;

/// Representation the extracted content is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentFormat {
    Html,
    Markdown,
    Text,
}

impl ContentFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "md",
            Self::Text => "txt",
        }
    }
}

impl FromStr for ContentFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "md" => Ok(Self::Markdown),
            "txt" => Ok(Self::Text),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ContentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// File type the page list is serialized into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    Txt,
    Json,
    Jsonl,
    Md,
    /// Plain-text document laid out on A4 pages.
    Pdf,
}

impl OutputType {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
            Self::Md => "md",
            Self::Pdf => "pdf",
        }
    }

    /// Content format used when none is requested explicitly.
    pub fn default_content_format(&self) -> ContentFormat {
        match self {
            Self::Md => ContentFormat::Markdown,
            _ => ContentFormat::Text,
        }
    }
}

impl FromStr for OutputType {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "json" => Ok(Self::Json),
            "jsonl" => Ok(Self::Jsonl),
            "md" => Ok(Self::Md),
            "pdf" => Ok(Self::Pdf),
            _ => Err(ExportError::UnsupportedOutputType(s.to_string())),
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_content_format() {
        assert_eq!("html".parse::<ContentFormat>().unwrap(), ContentFormat::Html);
        assert_eq!("MD".parse::<ContentFormat>().unwrap(), ContentFormat::Markdown);
        assert_eq!("txt".parse::<ContentFormat>().unwrap(), ContentFormat::Text);
    }

    #[test]
    fn test_unknown_content_format_is_rejected() {
        let err = "pdf".parse::<ContentFormat>().unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat(ref f) if f == "pdf"));
    }

    #[test]
    fn test_parse_output_type() {
        assert_eq!("jsonl".parse::<OutputType>().unwrap(), OutputType::Jsonl);
        assert_eq!("Json".parse::<OutputType>().unwrap(), OutputType::Json);
        assert_eq!(" pdf ".parse::<OutputType>().unwrap(), OutputType::Pdf);
        assert!(matches!(
            "docx".parse::<OutputType>(),
            Err(ExportError::UnsupportedOutputType(_))
        ));
    }

    #[test]
    fn test_default_content_format_follows_output_type() {
        assert_eq!(OutputType::Md.default_content_format(), ContentFormat::Markdown);
        assert_eq!(OutputType::Json.default_content_format(), ContentFormat::Text);
        assert_eq!(OutputType::Txt.default_content_format(), ContentFormat::Text);
        assert_eq!(OutputType::Pdf.default_content_format(), ContentFormat::Text);
    }
}
