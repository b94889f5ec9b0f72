//! Buffered UART receiver adapter
//!
//! Wraps the receive half of an interrupt-buffered UART. Bytes are moved
//! into the ring buffer by the UART interrupt; this adapter only drains
//! what is already there.

use dmxmon_hal::UartRx;
use embedded_io::{Read, ReadReady};

/// Non-blocking receiver over a buffered UART
pub struct BufferedRx<T> {
    inner: T,
}

impl<T> BufferedRx<T> {
    /// Wrap a buffered receive half
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Release the inner receiver
    pub fn release(self) -> T {
        self.inner
    }
}

impl<T: Read + ReadReady> UartRx for BufferedRx<T> {
    type Error = T::Error;

    fn is_readable(&mut self) -> Result<bool, Self::Error> {
        self.inner.read_ready()
    }

    fn read_available(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() || !self.inner.read_ready()? {
            return Ok(0);
        }
        // read_ready guarantees the next read returns without blocking
        self.inner.read(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_io::{ErrorKind, ErrorType};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockError;

    impl embedded_io::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// Ring buffer stand-in that hands out at most `chunk` bytes per read
    struct MockRx {
        data: [u8; 64],
        len: usize,
        pos: usize,
        chunk: usize,
        fail: bool,
    }

    impl MockRx {
        fn with(bytes: &[u8], chunk: usize) -> Self {
            let mut data = [0u8; 64];
            data[..bytes.len()].copy_from_slice(bytes);
            Self {
                data,
                len: bytes.len(),
                pos: 0,
                chunk,
                fail: false,
            }
        }
    }

    impl ErrorType for MockRx {
        type Error = MockError;
    }

    impl Read for MockRx {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, MockError> {
            if self.fail {
                return Err(MockError);
            }
            let n = buf.len().min(self.len - self.pos).min(self.chunk);
            buf[..n].copy_from_slice(&self.data[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    impl ReadReady for MockRx {
        fn read_ready(&mut self) -> Result<bool, MockError> {
            if self.fail {
                return Err(MockError);
            }
            Ok(self.pos < self.len)
        }
    }

    #[test]
    fn test_empty_buffer_reads_nothing() {
        let mut rx = BufferedRx::new(MockRx::with(&[], 8));
        let mut buf = [0u8; 8];
        assert_eq!(rx.is_readable(), Ok(false));
        assert_eq!(rx.read_available(&mut buf), Ok(0));
    }

    #[test]
    fn test_reads_what_is_buffered() {
        let mut rx = BufferedRx::new(MockRx::with(&[1, 2, 3, 4, 5], 3));
        let mut buf = [0u8; 8];
        assert_eq!(rx.is_readable(), Ok(true));
        assert_eq!(rx.read_available(&mut buf), Ok(3));
        assert_eq!(&buf[..3], &[1, 2, 3]);
        assert_eq!(rx.read_available(&mut buf), Ok(2));
        assert_eq!(&buf[..2], &[4, 5]);
        assert_eq!(rx.read_available(&mut buf), Ok(0));
    }

    #[test]
    fn test_error_propagates() {
        let mut mock = MockRx::with(&[1], 8);
        mock.fail = true;
        let mut rx = BufferedRx::new(mock);
        let mut buf = [0u8; 4];
        assert_eq!(rx.read_available(&mut buf), Err(MockError));
    }
}
