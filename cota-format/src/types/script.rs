use super::basic::{Byte, Byte32};
use crate::layout::{Bytes, LayoutResult, Table, View};

/// CKB lock script: `table Script { code_hash: Byte32, hash_type: byte, args: Bytes }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script<'r>(Table<'r>);

impl<'r> View<'r> for Script<'r> {
    const NAME: &'static str = "Script";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        Table::from_slice(Self::NAME, slice, Self::FIELD_COUNT).map(Script)
    }

    fn as_slice(&self) -> &'r [u8] {
        self.0.as_slice()
    }
}

impl<'r> Script<'r> {
    pub const FIELD_COUNT: usize = 3;

    pub fn code_hash(&self) -> LayoutResult<Byte32<'r>> {
        self.0.field_as(0)
    }

    pub fn hash_type(&self) -> LayoutResult<Byte<'r>> {
        self.0.field_as(1)
    }

    pub fn args(&self) -> LayoutResult<Bytes<'r>> {
        self.0.field_as(2)
    }
}
