/// Errors raised while decoding a binary tree stream.
#[derive(Debug, thiserror::Error)]
pub enum VdfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stream: unknown tag 0x{tag:02x} at offset {offset}")]
    MalformedStream { offset: usize, tag: u8 },

    #[error("Unexpected end of stream at offset {offset}")]
    UnexpectedEnd { offset: usize },
}

impl VdfError {
    /// Byte offset the error was detected at, if it came from the decoder.
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::MalformedStream { offset, .. } | Self::UnexpectedEnd { offset } => Some(*offset),
            Self::Io(_) => None,
        }
    }
}
