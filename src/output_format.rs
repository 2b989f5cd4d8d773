// src/output_format.rs

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::TimelineError;

/// Image formats the renderer can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }

    /// `<output>.<extension>`
    pub fn output_path(self, output: &str) -> PathBuf {
        PathBuf::from(format!("{output}.{}", self.extension()))
    }
}

impl FromStr for OutputFormat {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            _ => Err(TimelineError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Parses every requested format up front so a bad one fails before any drawing.
pub fn parse_formats<S: AsRef<str>>(formats: &[S]) -> Result<Vec<OutputFormat>, TimelineError> {
    let mut parsed: Vec<OutputFormat> = Vec::with_capacity(formats.len());
    for name in formats {
        let format: OutputFormat = name.as_ref().parse()?;
        if !parsed.contains(&format) {
            parsed.push(format);
        }
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        let formats = parse_formats(&["png", "SVG", "png"]).unwrap();
        assert_eq!(formats, vec![OutputFormat::Png, OutputFormat::Svg]);
    }

    #[test]
    fn test_pdf_is_unsupported() {
        assert!(matches!(
            parse_formats(&["png", "pdf"]),
            Err(TimelineError::UnsupportedFormat(f)) if f == "pdf"
        ));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(OutputFormat::Svg.output_path("colliders"), PathBuf::from("colliders.svg"));
        assert_eq!(OutputFormat::Png.output_path("out/future1"), PathBuf::from("out/future1.png"));
    }
}
