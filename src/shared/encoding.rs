use crate::shared::error::NoticeError;
use crate::shared::Result;
use std::fmt;
use std::str::FromStr;

/// Character encodings accepted for templates and lookup files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharacterEncoding {
    #[default]
    Utf8,
    UsAscii,
    Latin1,
}

impl CharacterEncoding {
    /// Decodes raw bytes into a string, failing on byte sequences that are
    /// invalid for this encoding
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String> {
        match self {
            CharacterEncoding::Utf8 => String::from_utf8(bytes)
                .map_err(|e| anyhow::anyhow!("Content is not valid UTF-8: {}", e)),
            CharacterEncoding::UsAscii => {
                if let Some(pos) = bytes.iter().position(|b| !b.is_ascii()) {
                    anyhow::bail!("Content is not valid US-ASCII: non-ASCII byte at offset {}", pos);
                }
                // All bytes are ASCII, so this cannot fail
                Ok(bytes.into_iter().map(char::from).collect())
            }
            CharacterEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }

    /// Encodes a string, failing on characters this encoding cannot represent
    pub fn encode(&self, content: &str) -> Result<Vec<u8>> {
        let limit = match self {
            CharacterEncoding::Utf8 => return Ok(content.as_bytes().to_vec()),
            CharacterEncoding::UsAscii => 0x7F,
            CharacterEncoding::Latin1 => 0xFF,
        };
        content
            .chars()
            .map(|c| match u8::try_from(u32::from(c)) {
                Ok(b) if u32::from(b) <= limit => Ok(b),
                _ => Err(anyhow::anyhow!(
                    "Character '{}' cannot be represented in {}",
                    c,
                    self
                )),
            })
            .collect()
    }
}

impl FromStr for CharacterEncoding {
    type Err = NoticeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('_', "-").as_str() {
            "UTF-8" | "UTF8" => Ok(CharacterEncoding::Utf8),
            "US-ASCII" | "ASCII" => Ok(CharacterEncoding::UsAscii),
            "ISO-8859-1" | "LATIN1" | "LATIN-1" => Ok(CharacterEncoding::Latin1),
            _ => Err(NoticeError::UnsupportedEncoding {
                encoding: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for CharacterEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterEncoding::Utf8 => write!(f, "UTF-8"),
            CharacterEncoding::UsAscii => write!(f, "US-ASCII"),
            CharacterEncoding::Latin1 => write!(f, "ISO-8859-1"),
        }
    }
}
