use super::{read_number, LayoutResult, VerificationError, View, NUMBER_SIZE};

/// Parses an offset-table header: total size, then one start offset per item.
///
/// The returned offsets end with the total size, so item `i` spans
/// `offsets[i]..offsets[i + 1]`. A slice holding only the total size has no
/// items and yields `[NUMBER_SIZE]`.
pub(crate) fn read_offsets(name: &str, slice: &[u8]) -> LayoutResult<Vec<usize>> {
    let len = slice.len();
    let total_size = read_number(slice, 0)
        .ok_or_else(|| VerificationError::HeaderIsBroken(name.to_owned(), NUMBER_SIZE, len))?;
    if total_size != len {
        return Err(VerificationError::TotalSizeNotMatch(
            name.to_owned(),
            total_size,
            len,
        ));
    }
    if len == NUMBER_SIZE {
        return Ok(vec![NUMBER_SIZE]);
    }

    let header_size = read_number(slice, NUMBER_SIZE).ok_or_else(|| {
        VerificationError::HeaderIsBroken(name.to_owned(), NUMBER_SIZE * 2, len)
    })?;
    if header_size % NUMBER_SIZE != 0 || header_size < NUMBER_SIZE * 2 {
        return Err(VerificationError::OffsetsNotMatch(name.to_owned()));
    }
    if header_size > len {
        return Err(VerificationError::HeaderIsBroken(
            name.to_owned(),
            header_size,
            len,
        ));
    }

    let count = header_size / NUMBER_SIZE - 1;
    let mut offsets = Vec::with_capacity(count + 1);
    for index in 1..=count {
        let offset = read_number(slice, index * NUMBER_SIZE).ok_or_else(|| {
            VerificationError::HeaderIsBroken(name.to_owned(), header_size, len)
        })?;
        offsets.push(offset);
    }
    offsets.push(total_size);

    if offsets.windows(2).any(|pair| pair[0] > pair[1]) {
        return Err(VerificationError::OffsetsNotMatch(name.to_owned()));
    }
    Ok(offsets)
}

fn item_slice<'r>(
    name: &str,
    slice: &'r [u8],
    start: usize,
    end: usize,
) -> LayoutResult<&'r [u8]> {
    slice
        .get(start..end)
        .ok_or_else(|| VerificationError::OffsetsNotMatch(name.to_owned()))
}

/// A heterogeneous record located through an offset-table header.
///
/// Fields are decoded on access, in whatever order the caller needs them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<'r> {
    name: &'static str,
    slice: &'r [u8],
    offsets: Vec<usize>,
}

impl<'r> Table<'r> {
    /// Decodes the header, requiring exactly `field_count` fields.
    pub fn from_slice(
        name: &'static str,
        slice: &'r [u8],
        field_count: usize,
    ) -> LayoutResult<Self> {
        let offsets = read_offsets(name, slice)?;
        let actual = offsets.len().saturating_sub(1);
        if actual != field_count {
            return Err(VerificationError::FieldCountNotMatch(
                name.to_owned(),
                field_count,
                actual,
            ));
        }
        Ok(Table {
            name,
            slice,
            offsets,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn as_slice(&self) -> &'r [u8] {
        self.slice
    }

    pub fn field_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Field start offsets followed by the total size.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn field(&self, index: usize) -> LayoutResult<&'r [u8]> {
        match (self.offsets.get(index), self.offsets.get(index + 1)) {
            (Some(&start), Some(&end)) => item_slice(self.name, self.slice, start, end),
            _ => Err(VerificationError::FieldCountNotMatch(
                self.name.to_owned(),
                index + 1,
                self.field_count(),
            )),
        }
    }

    pub fn field_as<T: View<'r>>(&self, index: usize) -> LayoutResult<T> {
        T::from_slice(self.field(index)?)
    }
}

/// A vector of variable-size items located through an offset-table header.
#[derive(Clone, Debug)]
pub struct DynVec<'r, T> {
    slice: &'r [u8],
    items: Vec<T>,
}

impl<'r, T: View<'r>> View<'r> for DynVec<'r, T> {
    const NAME: &'static str = "DynVec";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        let offsets = read_offsets(Self::NAME, slice)?;
        let items = offsets
            .windows(2)
            .map(|pair| {
                item_slice(Self::NAME, slice, pair[0], pair[1]).and_then(T::from_slice)
            })
            .collect::<LayoutResult<Vec<_>>>()?;
        Ok(DynVec { slice, items })
    }

    fn as_slice(&self) -> &'r [u8] {
        self.slice
    }
}

impl<'r, T> DynVec<'r, T> {
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
