//! Bounds-checked cursor over a borrowed byte slice.
//!
//! Every read either succeeds or fails with [`DecodeError::Truncated`]; nothing
//! ever indexes past the end of the input.

use zerocopy::{FromBytes, Immutable, KnownLayout};

use crate::error::{DecodeError, Result};

#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Unread bytes, without consuming them.
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    fn truncated(&self, needed: usize) -> DecodeError {
        DecodeError::Truncated {
            needed,
            available: self.remaining(),
        }
    }

    pub fn peek_u8(&self) -> Result<u8> {
        self.rest().first().copied().ok_or_else(|| self.truncated(1))
    }

    pub fn u8(&mut self) -> Result<u8> {
        let b = self.peek_u8()?;
        self.pos += 1;
        Ok(b)
    }

    pub fn u16_le(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Consume exactly `n` bytes.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if n > self.remaining() {
            return Err(self.truncated(n));
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Fail with [`DecodeError::SizeMismatch`] unless exactly `n` bytes remain.
    pub fn expect_exact(&self, n: usize) -> Result<()> {
        if self.remaining() != n {
            return Err(DecodeError::SizeMismatch {
                expected: n,
                actual: self.remaining(),
            });
        }
        Ok(())
    }

    /// View the next bytes as a packed struct without consuming them.
    pub fn peek<T>(&self) -> Result<&'a T>
    where
        T: FromBytes + KnownLayout + Immutable,
    {
        T::ref_from_prefix(self.rest())
            .map(|(value, _)| value)
            .map_err(|_| self.truncated(std::mem::size_of::<T>()))
    }

    /// Consume the next bytes as a packed struct.
    pub fn read<T>(&mut self) -> Result<&'a T>
    where
        T: FromBytes + KnownLayout + Immutable,
    {
        let value = self.peek::<T>()?;
        self.pos += std::mem::size_of::<T>();
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_cursor() {
        let mut r = ByteReader::new(&[0x01, 0x34, 0x12, 0xAA]);
        assert_eq!(r.u8().unwrap(), 0x01);
        assert_eq!(r.u16_le().unwrap(), 0x1234);
        assert_eq!(r.position(), 3);
        assert_eq!(r.remaining(), 1);
        assert_eq!(r.rest(), &[0xAA]);
    }

    #[test]
    fn short_read_reports_truncation_without_consuming() {
        let mut r = ByteReader::new(&[0x01]);
        assert_eq!(
            r.u16_le(),
            Err(DecodeError::Truncated {
                needed: 2,
                available: 1
            })
        );
        assert_eq!(r.position(), 0);
        assert_eq!(r.take(1).unwrap(), &[0x01]);
        assert!(r.is_empty());
        assert!(r.u8().is_err());
    }

    #[test]
    fn expect_exact_reports_mismatch() {
        let r = ByteReader::new(&[0, 0, 0]);
        assert!(r.expect_exact(3).is_ok());
        assert_eq!(
            r.expect_exact(4),
            Err(DecodeError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }
}
