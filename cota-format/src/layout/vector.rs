use super::{read_number, FixedSize, LayoutResult, VerificationError, View, NUMBER_SIZE};

/// Checks a count-prefixed fixed-width vector and returns `(count, items)`.
fn read_fixvec<'r>(
    name: &str,
    slice: &'r [u8],
    item_size: usize,
) -> LayoutResult<(usize, &'r [u8])> {
    let len = slice.len();
    let count = read_number(slice, 0)
        .ok_or_else(|| VerificationError::HeaderIsBroken(name.to_owned(), NUMBER_SIZE, len))?;
    let expected = count
        .checked_mul(item_size)
        .and_then(|size| size.checked_add(NUMBER_SIZE))
        .ok_or_else(|| VerificationError::TotalSizeNotMatch(name.to_owned(), usize::MAX, len))?;
    if expected != len {
        return Err(VerificationError::TotalSizeNotMatch(
            name.to_owned(),
            expected,
            len,
        ));
    }
    let items = slice
        .get(NUMBER_SIZE..)
        .ok_or_else(|| VerificationError::HeaderIsBroken(name.to_owned(), NUMBER_SIZE, len))?;
    Ok((count, items))
}

/// `vector<byte>`: opaque payloads such as proofs, scripts and action text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bytes<'r> {
    slice: &'r [u8],
    raw: &'r [u8],
}

impl<'r> View<'r> for Bytes<'r> {
    const NAME: &'static str = "Bytes";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        let (_, raw) = read_fixvec(Self::NAME, slice, 1)?;
        Ok(Bytes { slice, raw })
    }

    fn as_slice(&self) -> &'r [u8] {
        self.slice
    }
}

impl<'r> Bytes<'r> {
    pub fn raw_data(&self) -> &'r [u8] {
        self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// A count-prefixed vector of fixed-size items with no per-item offsets.
#[derive(Clone, Debug)]
pub struct FixVec<'r, T> {
    slice: &'r [u8],
    items: Vec<T>,
}

impl<'r, T: View<'r> + FixedSize> View<'r> for FixVec<'r, T> {
    const NAME: &'static str = "FixVec";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        let (count, raw) = read_fixvec(Self::NAME, slice, T::SIZE)?;
        let items = raw
            .chunks_exact(T::SIZE)
            .map(T::from_slice)
            .collect::<LayoutResult<Vec<_>>>()?;
        debug_assert_eq!(items.len(), count);
        Ok(FixVec { slice, items })
    }

    fn as_slice(&self) -> &'r [u8] {
        self.slice
    }
}

impl<'r, T> FixVec<'r, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::builder;

    #[derive(Debug, PartialEq)]
    struct Pair(u8, u8);

    impl<'r> View<'r> for Pair {
        const NAME: &'static str = "Pair";

        fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
            crate::layout::verify_fixed_size(Self::NAME, slice, 2)?;
            Ok(Pair(slice[0], slice[1]))
        }

        fn as_slice(&self) -> &'r [u8] {
            &[]
        }
    }

    impl FixedSize for Pair {
        const SIZE: usize = 2;
    }

    #[test]
    fn test_bytes() {
        let data = builder::bytes(b"cota");
        assert_eq!(data, vec![4, 0, 0, 0, b'c', b'o', b't', b'a']);
        let bytes = Bytes::from_slice(&data).unwrap();
        assert_eq!(bytes.raw_data(), b"cota");
        assert_eq!(bytes.as_slice(), &data[..]);

        let empty = builder::bytes(&[]);
        assert!(Bytes::from_slice(&empty).unwrap().is_empty());
    }

    #[test]
    fn test_bytes_truncated() {
        let data = builder::bytes(b"cota");
        assert!(matches!(
            Bytes::from_slice(&data[..6]),
            Err(VerificationError::TotalSizeNotMatch(_, 8, 6))
        ));
        assert!(matches!(
            Bytes::from_slice(&data[..3]),
            Err(VerificationError::HeaderIsBroken(_, 4, 3))
        ));
    }

    #[test]
    fn test_fixvec_items() {
        let data = builder::fixvec(&[[1u8, 2], [3, 4]]);
        let vec = FixVec::<Pair>::from_slice(&data).unwrap();
        assert_eq!(vec.items(), &[Pair(1, 2), Pair(3, 4)]);
        assert_eq!(vec.as_slice(), &data[..]);
    }

    #[test]
    fn test_fixvec_not_multiple_of_item_size() {
        let mut data = builder::fixvec(&[[1u8, 2], [3, 4]]);
        data.pop();
        assert!(matches!(
            FixVec::<Pair>::from_slice(&data),
            Err(VerificationError::TotalSizeNotMatch(_, 8, 7))
        ));
    }

    #[test]
    fn test_fixvec_huge_count() {
        let data = [0xff, 0xff, 0xff, 0xff, 1, 2];
        assert!(FixVec::<Pair>::from_slice(&data).is_err());
    }
}
