use crate::layout::impl_array;

impl_array!(Byte, 1);
impl_array!(
    /// Sparse merkle tree leaf type tag.
    Uint16,
    2
);
impl_array!(Uint32, 4);
impl_array!(CotaId, 20);
impl_array!(Characteristic, 20);
impl_array!(
    /// Last 20 bytes of a transaction hash followed by the 4-byte output index.
    OutPointSlice,
    24
);
impl_array!(Byte32, 32);

impl<'r> Byte<'r> {
    pub fn value(&self) -> u8 {
        // size checked in from_slice
        self.0[0]
    }
}

impl<'r> Uint32<'r> {
    /// CoTA counters are stored big-endian, unlike molecule headers.
    pub fn unpack(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::View;

    #[test]
    fn test_uint32_is_big_endian() {
        let value = Uint32::from_slice(&[0x00, 0x00, 0x01, 0x02]).unwrap();
        assert_eq!(value.unpack(), 258);
    }

    #[test]
    fn test_array_size() {
        assert!(CotaId::from_slice(&[0u8; 20]).is_ok());
        assert!(CotaId::from_slice(&[0u8; 21]).is_err());
        assert!(Byte::from_slice(&[]).is_err());
        assert_eq!(Byte::from_slice(&[7]).unwrap().value(), 7);
    }
}
