use super::{verify_fixed_size, FixedSize, LayoutResult, VerificationError, View};

/// Walks the fields of a fixed-size struct in declaration order.
pub struct StructReader<'r> {
    name: &'static str,
    slice: &'r [u8],
    cursor: usize,
}

impl<'r> StructReader<'r> {
    pub fn new(name: &'static str, slice: &'r [u8], size: usize) -> LayoutResult<Self> {
        verify_fixed_size(name, slice, size)?;
        Ok(StructReader {
            name,
            slice,
            cursor: 0,
        })
    }

    pub fn read<T: View<'r> + FixedSize>(&mut self) -> LayoutResult<T> {
        let end = self.cursor.saturating_add(T::SIZE);
        let field = self.slice.get(self.cursor..end).ok_or_else(|| {
            VerificationError::TotalSizeNotMatch(self.name.to_owned(), end, self.slice.len())
        })?;
        self.cursor = end;
        T::from_slice(field)
    }

    /// Fails unless every byte of the struct has been consumed.
    pub fn finish(self) -> LayoutResult<()> {
        if self.cursor != self.slice.len() {
            return Err(VerificationError::TotalSizeNotMatch(
                self.name.to_owned(),
                self.cursor,
                self.slice.len(),
            ));
        }
        Ok(())
    }
}

/// Declares a `[byte; N]` view.
macro_rules! impl_array {
    ($(#[$meta:meta])* $name:ident, $size:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name<'r>(&'r [u8]);

        impl<'r> $crate::layout::View<'r> for $name<'r> {
            const NAME: &'static str = stringify!($name);

            fn from_slice(slice: &'r [u8]) -> $crate::layout::LayoutResult<Self> {
                $crate::layout::verify_fixed_size(Self::NAME, slice, $size)?;
                Ok($name(slice))
            }

            fn as_slice(&self) -> &'r [u8] {
                self.0
            }
        }

        impl<'r> $crate::layout::FixedSize for $name<'r> {
            const SIZE: usize = $size;
        }

        impl<'r> $name<'r> {
            pub fn raw_data(&self) -> &'r [u8] {
                self.0
            }
        }
    };
}

/// Declares a fixed-size struct view whose fields are themselves fixed-size views.
macro_rules! impl_struct {
    ($(#[$meta:meta])* $name:ident, $size:expr, { $($field:ident: $ty:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub struct $name<'r> {
            slice: &'r [u8],
            $($field: $ty<'r>,)+
        }

        impl<'r> $crate::layout::View<'r> for $name<'r> {
            const NAME: &'static str = stringify!($name);

            fn from_slice(slice: &'r [u8]) -> $crate::layout::LayoutResult<Self> {
                let mut reader = $crate::layout::StructReader::new(Self::NAME, slice, $size)?;
                $(let $field = reader.read::<$ty>()?;)+
                reader.finish()?;
                Ok($name { slice, $($field,)+ })
            }

            fn as_slice(&self) -> &'r [u8] {
                self.slice
            }
        }

        impl<'r> $crate::layout::FixedSize for $name<'r> {
            const SIZE: usize = $size;
        }

        impl<'r> $name<'r> {
            $(
                pub fn $field(&self) -> $ty<'r> {
                    self.$field
                }
            )+
        }
    };
}

pub(crate) use impl_array;
pub(crate) use impl_struct;

#[cfg(test)]
mod tests {
    use super::*;

    impl_array!(Byte2, 2);
    impl_array!(Byte3, 3);
    impl_struct!(Sample, 5, { head: Byte2, tail: Byte3 });

    #[test]
    fn test_struct_fields() {
        let data = [1u8, 2, 3, 4, 5];
        let sample = Sample::from_slice(&data).unwrap();
        assert_eq!(sample.head().raw_data(), &[1, 2]);
        assert_eq!(sample.tail().raw_data(), &[3, 4, 5]);
        assert_eq!(sample.as_slice(), &data);
        assert_eq!(Sample::SIZE, 5);
    }

    #[test]
    fn test_struct_wrong_size() {
        assert!(matches!(
            Sample::from_slice(&[1, 2, 3, 4]),
            Err(VerificationError::TotalSizeNotMatch(_, 5, 4))
        ));
    }

    #[test]
    fn test_reader_leftover() {
        let data = [1u8, 2, 3];
        let mut reader = StructReader::new("Leftover", &data, 3).unwrap();
        assert!(reader.read::<Byte2>().is_ok());
        assert!(matches!(
            reader.finish(),
            Err(VerificationError::TotalSizeNotMatch(_, 2, 3))
        ));
    }
}
