use crate::layout::{Bytes, LayoutResult, Table, View};

/// `table WitnessArgs { lock: BytesOpt, input_type: BytesOpt, output_type: BytesOpt }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessArgs<'r>(Table<'r>);

impl<'r> View<'r> for WitnessArgs<'r> {
    const NAME: &'static str = "WitnessArgs";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        Table::from_slice(Self::NAME, slice, Self::FIELD_COUNT).map(WitnessArgs)
    }

    fn as_slice(&self) -> &'r [u8] {
        self.0.as_slice()
    }
}

impl<'r> WitnessArgs<'r> {
    pub const FIELD_COUNT: usize = 3;

    pub fn lock(&self) -> LayoutResult<Option<Bytes<'r>>> {
        self.0.field_as(0)
    }

    pub fn input_type(&self) -> LayoutResult<Option<Bytes<'r>>> {
        self.0.field_as(1)
    }

    pub fn output_type(&self) -> LayoutResult<Option<Bytes<'r>>> {
        self.0.field_as(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ckb_types::{bytes, packed, prelude::*};

    #[test]
    fn test_decode_ckb_witness_args() {
        let witness = packed::WitnessArgs::new_builder()
            .lock(Some(bytes::Bytes::from(vec![0u8; 65])).pack())
            .input_type(Some(bytes::Bytes::from(vec![0x01, 0x02])).pack())
            .build();
        let view = WitnessArgs::from_slice(witness.as_slice()).unwrap();
        assert_eq!(view.lock().unwrap().unwrap().raw_data().len(), 65);
        assert_eq!(
            view.input_type().unwrap().unwrap().raw_data(),
            &[0x01, 0x02]
        );
        assert!(view.output_type().unwrap().is_none());
    }

    #[test]
    fn test_default_witness_args_has_no_input_type() {
        let witness = packed::WitnessArgs::default();
        let view = WitnessArgs::from_slice(witness.as_slice()).unwrap();
        assert!(view.input_type().unwrap().is_none());
    }

    #[test]
    fn test_reject_plain_bytes() {
        assert!(WitnessArgs::from_slice(&[0u8; 65]).is_err());
    }
}
