use super::basic::{Byte, Characteristic, CotaId, OutPointSlice, Uint16, Uint32};
use crate::layout::{impl_struct, Bytes, DynVec, FixVec, FixedSize, LayoutResult, Table, View};

use std::marker::PhantomData;

impl_struct!(
    /// Key of a defined NFT class.
    DefineCotaNFTId,
    22,
    { smt_type: Uint16, cota_id: CotaId }
);

impl_struct!(DefineCotaNFTValue, 9, {
    total: Uint32,
    issued: Uint32,
    configure: Byte,
});

impl_struct!(
    /// A single NFT: its class plus a big-endian token index.
    CotaNFTId,
    26,
    { smt_type: Uint16, cota_id: CotaId, index: Uint32 }
);

impl_struct!(CotaNFTInfo, 22, {
    configure: Byte,
    state: Byte,
    characteristic: Characteristic,
});

impl_struct!(WithdrawalCotaNFTKeyV1, 50, {
    nft_id: CotaNFTId,
    out_point: OutPointSlice,
});

pub type DefineCotaNFTKeyVec<'r> = FixVec<'r, DefineCotaNFTId<'r>>;
pub type DefineCotaNFTValueVec<'r> = FixVec<'r, DefineCotaNFTValue<'r>>;

/// `table WithdrawalCotaNFTValue { nft_info, to_lock: Bytes, out_point }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalCotaNFTValue<'r>(Table<'r>);

impl<'r> View<'r> for WithdrawalCotaNFTValue<'r> {
    const NAME: &'static str = "WithdrawalCotaNFTValue";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        Table::from_slice(Self::NAME, slice, 3).map(WithdrawalCotaNFTValue)
    }

    fn as_slice(&self) -> &'r [u8] {
        self.0.as_slice()
    }
}

impl<'r> WithdrawalCotaNFTValue<'r> {
    pub fn nft_info(&self) -> LayoutResult<CotaNFTInfo<'r>> {
        self.0.field_as(0)
    }

    /// Serialized `Script` of the receiver.
    pub fn to_lock(&self) -> LayoutResult<Bytes<'r>> {
        self.0.field_as(1)
    }

    pub fn out_point(&self) -> LayoutResult<OutPointSlice<'r>> {
        self.0.field_as(2)
    }
}

/// V1 moves the out point into the withdrawal key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawalCotaNFTValueV1<'r>(Table<'r>);

impl<'r> View<'r> for WithdrawalCotaNFTValueV1<'r> {
    const NAME: &'static str = "WithdrawalCotaNFTValueV1";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        Table::from_slice(Self::NAME, slice, 2).map(WithdrawalCotaNFTValueV1)
    }

    fn as_slice(&self) -> &'r [u8] {
        self.0.as_slice()
    }
}

impl<'r> WithdrawalCotaNFTValueV1<'r> {
    pub fn nft_info(&self) -> LayoutResult<CotaNFTInfo<'r>> {
        self.0.field_as(0)
    }

    pub fn to_lock(&self) -> LayoutResult<Bytes<'r>> {
        self.0.field_as(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefineCotaNFTEntries<'r>(Table<'r>);

impl<'r> View<'r> for DefineCotaNFTEntries<'r> {
    const NAME: &'static str = "DefineCotaNFTEntries";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        Table::from_slice(Self::NAME, slice, 4).map(DefineCotaNFTEntries)
    }

    fn as_slice(&self) -> &'r [u8] {
        self.0.as_slice()
    }
}

impl<'r> DefineCotaNFTEntries<'r> {
    pub fn define_keys(&self) -> LayoutResult<DefineCotaNFTKeyVec<'r>> {
        self.0.field_as(0)
    }

    pub fn define_values(&self) -> LayoutResult<DefineCotaNFTValueVec<'r>> {
        self.0.field_as(1)
    }

    pub fn proof(&self) -> LayoutResult<Bytes<'r>> {
        self.0.field_as(2)
    }

    pub fn action(&self) -> LayoutResult<Bytes<'r>> {
        self.0.field_as(3)
    }
}

/// Mint entries, generic over the withdrawal key and value layouts.
///
/// Both schema versions share the define prefix and the trailing proof and
/// action; only the withdrawal vectors differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MintEntries<'r, K, V> {
    table: Table<'r>,
    _layout: PhantomData<(K, V)>,
}

pub type MintCotaNFTEntries<'r> = MintEntries<'r, CotaNFTId<'r>, WithdrawalCotaNFTValue<'r>>;
pub type MintCotaNFTV1Entries<'r> =
    MintEntries<'r, WithdrawalCotaNFTKeyV1<'r>, WithdrawalCotaNFTValueV1<'r>>;

impl<'r, K, V> View<'r> for MintEntries<'r, K, V>
where
    K: View<'r> + FixedSize,
    V: View<'r>,
{
    const NAME: &'static str = "MintCotaNFTEntries";

    fn from_slice(slice: &'r [u8]) -> LayoutResult<Self> {
        let table = Table::from_slice(Self::NAME, slice, 7)?;
        Ok(MintEntries {
            table,
            _layout: PhantomData,
        })
    }

    fn as_slice(&self) -> &'r [u8] {
        self.table.as_slice()
    }
}

impl<'r, K, V> MintEntries<'r, K, V>
where
    K: View<'r> + FixedSize,
    V: View<'r>,
{
    pub fn define_keys(&self) -> LayoutResult<DefineCotaNFTKeyVec<'r>> {
        self.table.field_as(0)
    }

    pub fn define_old_values(&self) -> LayoutResult<DefineCotaNFTValueVec<'r>> {
        self.table.field_as(1)
    }

    pub fn define_new_values(&self) -> LayoutResult<DefineCotaNFTValueVec<'r>> {
        self.table.field_as(2)
    }

    pub fn withdrawal_keys(&self) -> LayoutResult<FixVec<'r, K>> {
        self.table.field_as(3)
    }

    pub fn withdrawal_values(&self) -> LayoutResult<DynVec<'r, V>> {
        self.table.field_as(4)
    }

    pub fn proof(&self) -> LayoutResult<Bytes<'r>> {
        self.table.field_as(5)
    }

    pub fn action(&self) -> LayoutResult<Bytes<'r>> {
        self.table.field_as(6)
    }
}
