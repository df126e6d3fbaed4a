/*
   Copyright 2021 Ivan Boldyrev

   Licensed under the Apache License, Version 2.0 (the "License");
   you may not use this file except in compliance with the License.
   You may obtain a copy of the License at

       http://www.apache.org/licenses/LICENSE-2.0

   Unless required by applicable law or agreed to in writing, software
   distributed under the License is distributed on an "AS IS" BASIS,
   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
   See the License for the specific language governing permissions and
   limitations under the License.
*/
use std::io::{self, Read};

/// Bounded by spec: a read loop that makes no progress this many times in a
/// row gives up instead of looping forever on a misbehaving socket.
const MAX_ZERO_PROGRESS_READS: usize = 100;

/// Buffered reader over a socket-like `Read` that supports rewinding
/// already-consumed bytes without discarding them from the buffer.
///
/// `pos` is the index of the last byte consumed; it starts at -1 (nothing
/// consumed yet). The buffer grows but is never truncated while a single
/// message is being parsed, so a `rewind` is always valid as long as its
/// precondition holds.
pub struct FramedReader<S> {
    socket: S,
    buf: Vec<u8>,
    pos: isize,
}

impl<S: Read> FramedReader<S> {
    pub fn new(socket: S) -> Self {
        Self {
            socket,
            buf: Vec::new(),
            pos: -1,
        }
    }

    pub fn get_ref(&self) -> &S {
        &self.socket
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.socket
    }

    /// Returns exactly `n` bytes, growing the internal buffer as needed.
    pub fn read(&mut self, n: usize) -> io::Result<&[u8]> {
        let want_end = (self.pos + 1) as usize + n;
        let mut zero_progress = 0;
        while self.buf.len() < want_end {
            let remaining = want_end - self.buf.len();
            let mut chunk = vec![0u8; remaining.min(4096)];
            let read = self.socket.read(&mut chunk)?;
            if read == 0 {
                zero_progress += 1;
                if zero_progress >= MAX_ZERO_PROGRESS_READS {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "no progress reading frame after repeated zero-length reads",
                    ));
                }
                continue;
            }
            zero_progress = 0;
            self.buf.extend_from_slice(&chunk[..read]);
        }
        let start = (self.pos + 1) as usize;
        self.pos += n as isize;
        Ok(&self.buf[start..want_end])
    }

    /// Decrements `pos` by `k`, making the last `k` already-read bytes
    /// available again to the next `read`. Precondition: `k <= pos + 1`.
    pub fn rewind(&mut self, k: usize) {
        assert!(
            k as isize <= self.pos + 1,
            "rewind({}) past start of buffer (pos={})",
            k,
            self.pos
        );
        self.pos -= k as isize;
    }

    /// Clears the buffer and resets the cursor; call between independent
    /// frames so a single message's bytes don't pin memory indefinitely.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.pos = -1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_exact() {
        let mut r = FramedReader::new(Cursor::new(b"hello world".to_vec()));
        assert_eq!(r.read(5).unwrap(), b"hello");
        assert_eq!(r.read(1).unwrap(), b" ");
        assert_eq!(r.read(5).unwrap(), b"world");
    }

    #[test]
    fn test_rewind_then_reread() {
        let mut r = FramedReader::new(Cursor::new(b"abcdef".to_vec()));
        let first = r.read(4).unwrap().to_vec();
        assert_eq!(first, b"abcd");
        r.rewind(2);
        let second = r.read(2).unwrap().to_vec();
        assert_eq!(second, b"cd");
    }

    #[test]
    fn test_read_past_eof_errors() {
        let mut r = FramedReader::new(Cursor::new(b"ab".to_vec()));
        assert!(r.read(10).is_err());
    }

    #[test]
    #[should_panic]
    fn test_rewind_too_far_panics() {
        let mut r = FramedReader::new(Cursor::new(b"abcdef".to_vec()));
        r.read(2).unwrap();
        r.rewind(5);
    }
}
