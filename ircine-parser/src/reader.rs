use ::lending_iterator::prelude::*;
pub use lending_iterator::LendingIterator;

use crate::buffer::Buffer;
use crate::error::ParsingError;
use crate::parser::{build_message, scan_message};
use crate::source::ByteSource;
use crate::Message;

/// Pulls successive messages out of a byte source, reusing a single buffer.
///
/// Every call to `next` resets the buffer, so each message must be dropped
/// before the following one is requested; that is what makes this a lending
/// iterator rather than a plain one. Iteration stops with `None` when the
/// source is cleanly exhausted at a message boundary; a source that dies
/// mid-line yields an error instead.
pub struct MessageReader<'b, S> {
    source: S,
    buffer: Buffer<'b>,
}

impl<'b, S: ByteSource> MessageReader<'b, S> {
    pub fn new(source: S, buffer: Buffer<'b>) -> Self {
        Self { source, buffer }
    }

    pub fn into_source(self) -> S {
        self.source
    }
}

#[gat]
impl<S: ByteSource> LendingIterator for MessageReader<'_, S> {
    type Item<'next>
    where
        Self: 'next,
    = Result<Message<'next>, ParsingError>;

    fn next(&mut self) -> Option<Result<Message<'_>, ParsingError>> {
        self.buffer.reset();
        match scan_message(&mut self.source, &mut self.buffer) {
            Ok(starts) => Some(Ok(build_message(&starts, &self.buffer))),
            Err(ParsingError::Stream { .. })
                if self.source.at_end() && self.buffer.is_empty() =>
            {
                None
            }
            Err(err) => Some(Err(err)),
        }
    }
}
