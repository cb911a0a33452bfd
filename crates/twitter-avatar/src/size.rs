//! Profile image size variants
//!
//! Twitter serves every profile image under a `_normal` name and exposes the
//! other sizes by swapping that suffix.

use std::fmt;

/// A requested profile image size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageSize {
    /// 73x73
    Bigger,
    /// 24x24
    Mini,
    /// 48x48
    #[default]
    Normal,
    /// Uploaded dimensions
    Original,
}

impl ImageSize {
    pub const ALL: [ImageSize; 4] = [Self::Bigger, Self::Mini, Self::Normal, Self::Original];

    /// Parse a size token case-insensitively; unknown or empty tokens are `Normal`
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "bigger" => Self::Bigger,
            "mini" => Self::Mini,
            "original" => Self::Original,
            _ => Self::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bigger => "bigger",
            Self::Mini => "mini",
            Self::Normal => "normal",
            Self::Original => "original",
        }
    }

    /// Derive the URL of this size from a `_normal` base image URL.
    ///
    /// A base URL without the expected marker is returned unchanged.
    pub fn apply(self, base_url: &str) -> String {
        match self {
            Self::Normal => base_url.to_string(),
            Self::Original => base_url.replacen("_normal", "", 1),
            Self::Bigger | Self::Mini => base_url.replacen("normal", self.as_str(), 1),
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
