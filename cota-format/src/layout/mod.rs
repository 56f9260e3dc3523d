//! Checked decoding of the molecule structural forms used by CoTA witnesses.
//!
//! Every view here borrows the caller's buffer. Lengths and offsets read from
//! the buffer are validated before any sub-slice is produced, so a truncated
//! or corrupted witness surfaces as a [`VerificationError`] instead of a panic.

pub mod builder;
mod option;
mod structure;
mod table;
mod vector;

pub use molecule::error::VerificationError;
pub use molecule::NUMBER_SIZE;
pub use structure::StructReader;
pub use table::{DynVec, Table};
pub use vector::{Bytes, FixVec};

pub(crate) use structure::{impl_array, impl_struct};

pub type LayoutResult<T> = Result<T, VerificationError>;

/// A read-only view decoded from a borrowed molecule slice.
pub trait View<'r>: Sized {
    const NAME: &'static str;

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self>;

    fn as_slice(&self) -> &'r [u8];
}

/// Views whose encoding always occupies the same number of bytes.
pub trait FixedSize {
    const SIZE: usize;
}

/// Reads the little-endian header number at `at`, `None` when it would run past the end.
pub(crate) fn read_number(slice: &[u8], at: usize) -> Option<usize> {
    let end = at.checked_add(NUMBER_SIZE)?;
    let bytes: [u8; NUMBER_SIZE] = slice.get(at..end)?.try_into().ok()?;
    usize::try_from(u32::from_le_bytes(bytes)).ok()
}

pub(crate) fn verify_fixed_size(name: &str, slice: &[u8], size: usize) -> LayoutResult<()> {
    if slice.len() != size {
        return Err(VerificationError::TotalSizeNotMatch(
            name.to_owned(),
            size,
            slice.len(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_number_bounds() {
        let slice = [0x10, 0x00, 0x00, 0x00, 0xff];
        assert_eq!(read_number(&slice, 0), Some(16));
        assert_eq!(read_number(&slice, 1), Some(0xff00_0000));
        assert_eq!(read_number(&slice, 2), None);
        assert_eq!(read_number(&slice, usize::MAX), None);
    }

    #[test]
    fn test_verify_fixed_size() {
        assert!(verify_fixed_size("Byte32", &[0u8; 32], 32).is_ok());
        assert!(matches!(
            verify_fixed_size("Byte32", &[0u8; 31], 32),
            Err(VerificationError::TotalSizeNotMatch(_, 32, 31))
        ));
    }
}
