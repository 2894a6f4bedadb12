use smallvec::SmallVec;

use crate::buffer::Buffer;
use crate::error::ParsingError;
use crate::source::ByteSource;
use crate::{Message, Tokens, MAX_TOKENS};

const CR: u8 = b'\r';
const LF: u8 = b'\n';
const SPACE: u8 = b' ';
const COLON: u8 = b':';

/// In-buffer marker closing a token, written over a consumed space or over
/// the line's trailing CR.
const TERMINATOR: u8 = 0;

/// Initial value of the previous-byte state; must not compare equal to CR
/// or SPACE.
const NO_PREVIOUS: u8 = 0;

pub(crate) type TokenStarts = SmallVec<[usize; MAX_TOKENS]>;

enum SplitEnd {
    LineTerminated,
    TrailingOpened,
}

/// Reads one CRLF-terminated message from `source` into `buffer` and
/// tokenizes it in place.
///
/// Tokens are slices into `buffer`; the buffer must be reset by the caller
/// before it is reused for another message. On error the message output does
/// not exist and the buffer holds whatever was written up to the failure.
pub fn parse_message<'a, S: ByteSource>(
    source: &mut S,
    buffer: &'a mut Buffer<'_>,
) -> Result<Message<'a>, ParsingError> {
    let starts = scan_message(source, buffer)?;
    Ok(build_message(&starts, buffer))
}

/// Consumes one line from the source into the buffer and returns the token
/// start offsets, without tying the result to the buffer's lifetime.
pub(crate) fn scan_message<S: ByteSource>(
    source: &mut S,
    buffer: &mut Buffer<'_>,
) -> Result<TokenStarts, ParsingError> {
    let mut starts: TokenStarts = smallvec::smallvec![buffer.len()];

    if let SplitEnd::TrailingOpened = split_tokens(source, buffer, &mut starts)? {
        slurp_trailing(source, buffer)?;
    }

    Ok(starts)
}

/// First phase: split on spaces until the line terminator is seen or a
/// trailing parameter opens.
fn split_tokens<S: ByteSource>(
    source: &mut S,
    buffer: &mut Buffer<'_>,
    starts: &mut TokenStarts,
) -> Result<SplitEnd, ParsingError> {
    let mut previous = NO_PREVIOUS;

    loop {
        let c = next_or_stream_error(source)?;

        if c == LF && previous == CR {
            // the CR already sits in the buffer; it becomes the marker
            buffer.overwrite_last(TERMINATOR);
            return Ok(SplitEnd::LineTerminated);
        }

        if c == SPACE {
            let offset = buffer.push(TERMINATOR)?;
            if starts.len() == MAX_TOKENS {
                return Err(ParsingError::TooManyTokens);
            }
            starts.push(offset + 1);
            previous = c;
            continue;
        }

        buffer.push(c)?;

        if c == COLON && previous == SPACE {
            return Ok(SplitEnd::TrailingOpened);
        }
        previous = c;
    }
}

/// Second phase: the trailing parameter runs verbatim, spaces included, up
/// to the line terminator.
fn slurp_trailing<S: ByteSource>(
    source: &mut S,
    buffer: &mut Buffer<'_>,
) -> Result<(), ParsingError> {
    let mut previous = COLON;

    loop {
        let c = next_or_stream_error(source)?;

        if c == LF && previous == CR {
            buffer.overwrite_last(TERMINATOR);
            return Ok(());
        }

        buffer.push(c)?;
        previous = c;
    }
}

fn next_or_stream_error<S: ByteSource>(source: &mut S) -> Result<u8, ParsingError> {
    source.next_byte().ok_or(ParsingError::Stream {
        code: source.last_error(),
    })
}

/// Each token ends right before the next token's start (skipping the marker
/// in between); the last one ends at the final marker.
pub(crate) fn build_message<'a>(starts: &[usize], buffer: &'a Buffer<'_>) -> Message<'a> {
    let bytes = buffer.written();
    let mut tokens = Tokens::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = match starts.get(i + 1) {
            Some(&next) => next - 1,
            None => bytes.len().saturating_sub(1),
        };
        tokens.push(bytes.get(start..end).unwrap_or_default());
    }
    Message::new(tokens)
}
