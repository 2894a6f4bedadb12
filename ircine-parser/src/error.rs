#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    #[error("buffer capacity exhausted")]
    Overflow,
    #[error("buffer holds no bytes")]
    Empty,
}

/// Why a message could not be produced. The variants separate "the buffer
/// was too small", "the transport ended or failed", and "the message broke
/// the token bound", so callers can choose between retrying with a larger
/// buffer, reconnecting, and dropping the line.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsingError {
    #[error("message does not fit in the buffer: {0}")]
    Buffer(#[from] BufferError),
    #[error("stream ended before a message terminator (code {code})")]
    Stream { code: i32 },
    #[error("message exceeds {} tokens", crate::MAX_TOKENS)]
    TooManyTokens,
}
