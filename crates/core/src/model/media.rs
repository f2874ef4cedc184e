use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MediaValidationError {
    #[error("video reference cannot be empty")]
    EmptyVideoRef,
}

//
// ─── VIDEO REFERENCE ───────────────────────────────────────────────────────────
//

/// Locator of the playable resource behind a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VideoRef {
    FilePath(PathBuf),
    Url(Url),
}

impl VideoRef {
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self, MediaValidationError> {
        let p = path.into();
        if p.as_os_str().is_empty() {
            return Err(MediaValidationError::EmptyVideoRef);
        }
        Ok(VideoRef::FilePath(p))
    }

    /// Parses a raw locator: absolute URLs become `Url`, anything else a file path.
    ///
    /// Single-letter schemes are treated as Windows drive letters.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyVideoRef);
        }
        match Url::parse(s) {
            Ok(u) if u.scheme().len() > 1 => Ok(VideoRef::Url(u)),
            _ => Self::from_file(s),
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            VideoRef::FilePath(p) => Some(p.as_path()),
            VideoRef::Url(_) => None,
        }
    }

    pub fn as_url(&self) -> Option<&Url> {
        match self {
            VideoRef::Url(u) => Some(u),
            VideoRef::FilePath(_) => None,
        }
    }

    /// String usable as the `src` of a media element.
    #[must_use]
    pub fn to_src(&self) -> String {
        match self {
            VideoRef::FilePath(p) => p.to_string_lossy().into_owned(),
            VideoRef::Url(u) => u.as_str().to_owned(),
        }
    }
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_src())
    }
}

impl TryFrom<String> for VideoRef {
    type Error = MediaValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<VideoRef> for String {
    fn from(value: VideoRef) -> Self {
        value.to_src()
    }
}

//
// ─── DOCUMENTATION ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocFormat {
    /// Trusted, pre-sanitized markup.
    #[default]
    Html,
    Markdown,
}

impl DocFormat {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DocFormat::Html => "html",
            DocFormat::Markdown => "markdown",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "html" => Some(DocFormat::Html),
            "markdown" => Some(DocFormat::Markdown),
            _ => None,
        }
    }
}

/// Rich-text body shown next to the video.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Documentation {
    #[serde(default)]
    pub format: DocFormat,
    #[serde(default)]
    pub body: String,
}

impl Documentation {
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            format: DocFormat::Html,
            body: body.into(),
        }
    }

    pub fn markdown(body: impl Into<String>) -> Self {
        Self {
            format: DocFormat::Markdown,
            body: body.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }
}
