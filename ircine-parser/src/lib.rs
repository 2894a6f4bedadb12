//! Lexical parsing of IRC-style wire messages: CRLF-terminated lines split
//! into space-delimited tokens, with the `:`-introduced trailing parameter
//! captured verbatim. No semantic validation of commands or parameters.
use smallvec::SmallVec;

mod buffer;
mod error;
mod parser;
mod reader;
mod source;

pub use crate::buffer::Buffer;
pub use crate::error::{BufferError, ParsingError};
pub use crate::parser::parse_message;
pub use crate::reader::{LendingIterator, MessageReader};
pub use crate::source::{ByteSource, MemorySource};

/// Maximum number of tokens in a single message, trailing parameter
/// included.
pub const MAX_TOKENS: usize = 32;

pub type Tokens<'a> = SmallVec<[&'a [u8]; MAX_TOKENS]>;

///
/// See: https://modern.ircdocs.horse/#client-to-server-protocol-structure
///
/// Tokens are views into the buffer the message was parsed into; the message
/// is only valid until that buffer is reset or reused.
#[derive(Debug)]
pub struct Message<'m> {
    tokens: Tokens<'m>,
}

impl<'m> Message<'m> {
    pub(crate) fn new(tokens: Tokens<'m>) -> Self {
        Self { tokens }
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &Tokens<'m> {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&'m [u8]> {
        self.tokens.get(index).copied()
    }

    pub fn first_token(&self) -> Option<&'m [u8]> {
        self.tokens.first().copied()
    }
}
