//! Serialisers for the same structural forms the views decode.
//!
//! Sizes are written as `u32`; payloads beyond 4 GiB are not representable.

use super::NUMBER_SIZE;

fn pack_number(number: usize) -> [u8; NUMBER_SIZE] {
    (number as u32).to_le_bytes()
}

fn pack_offsets<I: AsRef<[u8]>>(items: &[I]) -> Vec<u8> {
    let header_size = NUMBER_SIZE * (items.len() + 1);
    let body_size: usize = items.iter().map(|item| item.as_ref().len()).sum();
    let mut data = Vec::with_capacity(header_size + body_size);
    data.extend_from_slice(&pack_number(header_size + body_size));
    let mut offset = header_size;
    for item in items {
        data.extend_from_slice(&pack_number(offset));
        offset += item.as_ref().len();
    }
    for item in items {
        data.extend_from_slice(item.as_ref());
    }
    data
}

pub fn bytes(raw: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(NUMBER_SIZE + raw.len());
    data.extend_from_slice(&pack_number(raw.len()));
    data.extend_from_slice(raw);
    data
}

/// Items must all have the same size.
pub fn fixvec<I: AsRef<[u8]>>(items: &[I]) -> Vec<u8> {
    let mut data = pack_number(items.len()).to_vec();
    for item in items {
        data.extend_from_slice(item.as_ref());
    }
    data
}

pub fn dynvec<I: AsRef<[u8]>>(items: &[I]) -> Vec<u8> {
    pack_offsets(items)
}

pub fn table<I: AsRef<[u8]>>(fields: &[I]) -> Vec<u8> {
    pack_offsets(fields)
}

pub fn option<I: AsRef<[u8]>>(inner: Option<I>) -> Vec<u8> {
    inner.map(|value| value.as_ref().to_vec()).unwrap_or_default()
}

/// Concatenates fixed-size fields into a struct.
pub fn structure<I: AsRef<[u8]>>(fields: &[I]) -> Vec<u8> {
    fields.iter().flat_map(|field| field.as_ref().iter().copied()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_layout() {
        let data = table(&[vec![0xaau8], vec![0xbb, 0xcc]]);
        assert_eq!(
            data,
            vec![15, 0, 0, 0, 12, 0, 0, 0, 13, 0, 0, 0, 0xaa, 0xbb, 0xcc]
        );
    }

    #[test]
    fn test_option_layout() {
        assert!(option::<Vec<u8>>(None).is_empty());
        assert_eq!(option(Some([1u8, 2])), vec![1, 2]);
    }
}
