/// Capability consumed by the tokenizer: a stateful producer of one byte at
/// a time.
///
/// [`next_byte`](ByteSource::next_byte) returning `None` is the only failure
/// signal the tokenizer reacts to; [`at_end`](ByteSource::at_end) and
/// [`last_error`](ByteSource::last_error) only qualify that failure with a
/// source-specific diagnostic code.
pub trait ByteSource {
    /// The next byte, or `None` when the source has no more to give.
    fn next_byte(&mut self) -> Option<u8>;

    /// Whether the source ran out of input cleanly, as opposed to failing.
    fn at_end(&self) -> bool;

    /// The diagnostic code attached when the source runs dry. Zero means a
    /// clean end of input.
    fn last_error(&self) -> i32;
}

/// Cursor over a fixed in-memory string. A NUL byte counts as end of input,
/// same as the end of the slice.
#[derive(Debug)]
pub struct MemorySource<'s> {
    data: &'s [u8],
    pos: usize,
}

impl<'s> MemorySource<'s> {
    pub fn new(data: &'s [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl ByteSource for MemorySource<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        match self.data.get(self.pos).copied() {
            None | Some(0) => None,
            Some(byte) => {
                self.pos += 1;
                Some(byte)
            }
        }
    }

    fn at_end(&self) -> bool {
        matches!(self.data.get(self.pos), None | Some(0))
    }

    fn last_error(&self) -> i32 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_bytes_then_ends() {
        let mut source = MemorySource::new(b"ab");
        assert!(!source.at_end());
        assert_eq!(source.next_byte(), Some(b'a'));
        assert_eq!(source.next_byte(), Some(b'b'));
        assert!(source.at_end());
        assert_eq!(source.next_byte(), None);
        assert_eq!(source.last_error(), 0);
    }

    #[test]
    fn nul_counts_as_end_of_input() {
        let mut source = MemorySource::new(b"a\0b");
        assert_eq!(source.next_byte(), Some(b'a'));
        assert!(source.at_end());
        assert_eq!(source.next_byte(), None);
        assert_eq!(source.next_byte(), None);
    }

    #[test]
    fn empty_input_is_at_end() {
        let mut source = MemorySource::new(b"");
        assert!(source.at_end());
        assert_eq!(source.next_byte(), None);
    }
}
