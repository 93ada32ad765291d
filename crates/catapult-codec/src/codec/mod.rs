//! Binary encoding/decoding for Catapult transactions.

pub mod account_properties;
pub mod primitives;
pub mod registry;

pub use account_properties::{
    decode_account_properties, encode_account_properties, AccountPropertiesCodec,
    AddressPropertiesCodec, EntityTypePropertiesCodec, MosaicPropertiesCodec, PropertyValue,
};
pub use primitives::{Reader, Writer};
pub use registry::{CodecRegistry, TransactionCodec};
