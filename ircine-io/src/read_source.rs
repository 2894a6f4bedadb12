use std::io::{ErrorKind, Read};

use ircine_parser::ByteSource;

const CHUNK_SIZE: usize = 512;

/// Byte source over anything `Read`: TCP sockets, files, pipes.
///
/// Bytes are handed out one at a time from a fixed internal chunk that is
/// refilled with blocking reads. Time-bounding is the transport's job, e.g.
/// `TcpStream::set_read_timeout`; a timed-out read surfaces through the
/// error code like any other I/O failure.
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
    chunk: [u8; CHUNK_SIZE],
    filled: usize,
    pos: usize,
    eof: bool,
    error_code: i32,
}

impl<R: Read> ReadSource<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            chunk: [0; CHUNK_SIZE],
            filled: 0,
            pos: 0,
            eof: false,
            error_code: 0,
        }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn refill(&mut self) -> bool {
        loop {
            match self.inner.read(&mut self.chunk) {
                Ok(0) => {
                    self.eof = true;
                    return false;
                }
                Ok(filled) => {
                    self.filled = filled;
                    self.pos = 0;
                    return true;
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    log::warn!("read failed on the underlying transport: {err}");
                    self.error_code = err.raw_os_error().unwrap_or(-1);
                    return false;
                }
            }
        }
    }
}

impl<R: Read> ByteSource for ReadSource<R> {
    fn next_byte(&mut self) -> Option<u8> {
        if self.eof || self.error_code != 0 {
            return None;
        }
        if self.pos == self.filled && !self.refill() {
            return None;
        }
        let byte = self.chunk.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }

    fn at_end(&self) -> bool {
        self.eof
    }

    fn last_error(&self) -> i32 {
        self.error_code
    }
}
