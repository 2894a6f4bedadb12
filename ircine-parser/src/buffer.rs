use crate::error::BufferError;

/// Fixed-capacity accumulation region over caller-supplied storage.
///
/// The write cursor only moves forward under [`push`](Buffer::push) and back
/// to zero under [`reset`](Buffer::reset). Bytes past the cursor are stale
/// leftovers from earlier uses and must not be read.
#[derive(Debug)]
pub struct Buffer<'b> {
    len: usize,
    storage: &'b mut [u8],
}

impl<'b> Buffer<'b> {
    pub fn new(storage: &'b mut [u8]) -> Self {
        Self { len: 0, storage }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Appends one byte, returning the offset it was written at.
    pub fn push(&mut self, byte: u8) -> Result<usize, BufferError> {
        let offset = self.len;
        let slot = self.storage.get_mut(offset).ok_or(BufferError::Overflow)?;
        *slot = byte;
        self.len += 1;
        Ok(offset)
    }

    /// The most recently written byte.
    pub fn last(&self) -> Result<u8, BufferError> {
        self.written().last().copied().ok_or(BufferError::Empty)
    }

    /// Replaces the most recently written byte in place. Does nothing when
    /// the buffer holds no bytes.
    pub fn overwrite_last(&mut self, byte: u8) {
        if self.len > 0 {
            if let Some(slot) = self.storage.get_mut(self.len - 1) {
                *slot = byte;
            }
        }
    }

    /// Moves the write cursor back to zero without clearing the storage.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// The written prefix of the storage.
    pub fn written(&self) -> &[u8] {
        self.storage.get(..self.len).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BufferError;

    #[test]
    fn push_returns_offsets() {
        let mut storage = [0u8; 4];
        let mut buffer = Buffer::new(&mut storage);
        assert_eq!(buffer.push(b'a'), Ok(0));
        assert_eq!(buffer.push(b'b'), Ok(1));
        assert_eq!(buffer.written(), b"ab");
    }

    #[test]
    fn push_overflows_at_capacity() {
        let mut storage = [0u8; 2];
        let mut buffer = Buffer::new(&mut storage);
        assert_eq!(buffer.capacity(), 2);
        assert_eq!(buffer.push(b'a'), Ok(0));
        assert_eq!(buffer.push(b'b'), Ok(1));
        assert_eq!(buffer.push(b'c'), Err(BufferError::Overflow));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn last_of_empty() {
        let mut storage = [0u8; 4];
        let buffer = Buffer::new(&mut storage);
        assert_eq!(buffer.last(), Err(BufferError::Empty));
    }

    #[test]
    fn overwrite_last_replaces_in_place() {
        let mut storage = [0u8; 4];
        let mut buffer = Buffer::new(&mut storage);
        buffer.push(b'a').unwrap();
        buffer.push(b'b').unwrap();
        buffer.overwrite_last(0);
        assert_eq!(buffer.written(), b"a\0");
        assert_eq!(buffer.last(), Ok(0));
    }

    #[test]
    fn overwrite_last_of_empty_is_a_noop() {
        let mut storage = [0u8; 4];
        let mut buffer = Buffer::new(&mut storage);
        buffer.overwrite_last(b'x');
        assert!(buffer.is_empty());
    }

    #[test]
    fn reset_rewinds_the_cursor() {
        let mut storage = [0u8; 4];
        let mut buffer = Buffer::new(&mut storage);
        buffer.push(b'a').unwrap();
        buffer.reset();
        assert!(buffer.is_empty());
        assert_eq!(buffer.push(b'z'), Ok(0));
        assert_eq!(buffer.written(), b"z");
    }
}
