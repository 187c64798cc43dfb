//! Push-notification device tokens.

use std::fmt;

/// Raw token bytes handed out by the push registration callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceToken {
    bytes: Vec<u8>,
}

impl DeviceToken {
    #[must_use]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex with no separators, the form push providers expect.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

/// Lowercase hex in 4-byte groups separated by spaces, e.g.
/// `790bc691 eea10194 d80cea25`.
impl fmt::Display for DeviceToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chunk) in self.bytes.chunks(4).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for b in chunk {
                write!(f, "{b:02x}")?;
            }
        }
        Ok(())
    }
}
