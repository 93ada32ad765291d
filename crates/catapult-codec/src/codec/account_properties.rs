//! Account properties transaction encoding/decoding.
//!
//! Wire layout of every account properties variant:
//!
//! ```text
//! [property_type: u8][modification_count: u8]
//! modification_count x [modification_type: u8][value: fixed width]
//! ```
//!
//! The value width is not tagged per modification. It is fixed by the
//! transaction's entity type through [`PropertyValue`]:
//!
//! | entity type                      | value            | width |
//! |----------------------------------|------------------|-------|
//! | `ACCOUNT_PROPERTIES_ADDRESS`     | raw address      | 25    |
//! | `ACCOUNT_PROPERTIES_MOSAIC`      | mosaic id (LE)   | 8     |
//! | `ACCOUNT_PROPERTIES_ENTITY_TYPE` | entity type (LE) | 2     |

use std::fmt;
use std::marker::PhantomData;

use crate::codec::primitives::{Reader, Writer};
use crate::codec::registry::TransactionCodec;
use crate::error::{DecodeError, EncodeError};
use crate::limits::{ADDRESS_DECODED_SIZE, ENTITY_TYPE_SIZE, MAX_PROPERTY_MODIFICATIONS, MOSAIC_ID_SIZE};
use crate::model::{
    AccountPropertiesTransaction, Address, EntityType, ModificationType, MosaicId,
    PropertyModification, PropertyType, Transaction,
};

/// A modification value with a fixed wire width.
///
/// Each implementation is one row of the value-width table and binds the
/// value shape to the entity type that carries it.
pub trait PropertyValue: Sized + Clone {
    /// Encoded size in bytes.
    const SIZE: usize;

    /// Entity type of transactions whose modifications carry this value.
    const ENTITY_TYPE: EntityType;

    fn read(reader: &mut Reader<'_>) -> Result<Self, DecodeError>;

    fn write(&self, writer: &mut Writer);

    /// Wraps a typed transaction into the transaction record.
    fn into_transaction(transaction: AccountPropertiesTransaction<Self>) -> Transaction;

    /// Borrows the typed transaction if the record is of this kind.
    fn from_transaction(transaction: &Transaction) -> Option<&AccountPropertiesTransaction<Self>>;
}

impl PropertyValue for Address {
    const SIZE: usize = ADDRESS_DECODED_SIZE;
    const ENTITY_TYPE: EntityType = EntityType::ACCOUNT_PROPERTIES_ADDRESS;

    fn read(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_array("address")
    }

    fn write(&self, writer: &mut Writer) {
        writer.write_bytes(self);
    }

    fn into_transaction(transaction: AccountPropertiesTransaction<Self>) -> Transaction {
        Transaction::AccountPropertiesAddress(transaction)
    }

    fn from_transaction(transaction: &Transaction) -> Option<&AccountPropertiesTransaction<Self>> {
        match transaction {
            Transaction::AccountPropertiesAddress(inner) => Some(inner),
            _ => None,
        }
    }
}

impl PropertyValue for MosaicId {
    const SIZE: usize = MOSAIC_ID_SIZE;
    const ENTITY_TYPE: EntityType = EntityType::ACCOUNT_PROPERTIES_MOSAIC;

    fn read(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_u64_le("mosaic_id").map(MosaicId)
    }

    fn write(&self, writer: &mut Writer) {
        writer.write_u64_le(self.0);
    }

    fn into_transaction(transaction: AccountPropertiesTransaction<Self>) -> Transaction {
        Transaction::AccountPropertiesMosaic(transaction)
    }

    fn from_transaction(transaction: &Transaction) -> Option<&AccountPropertiesTransaction<Self>> {
        match transaction {
            Transaction::AccountPropertiesMosaic(inner) => Some(inner),
            _ => None,
        }
    }
}

impl PropertyValue for EntityType {
    const SIZE: usize = ENTITY_TYPE_SIZE;
    const ENTITY_TYPE: EntityType = EntityType::ACCOUNT_PROPERTIES_ENTITY_TYPE;

    fn read(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        reader.read_u16_le("entity_type").map(EntityType)
    }

    fn write(&self, writer: &mut Writer) {
        writer.write_u16_le(self.0);
    }

    fn into_transaction(transaction: AccountPropertiesTransaction<Self>) -> Transaction {
        Transaction::AccountPropertiesEntityType(transaction)
    }

    fn from_transaction(transaction: &Transaction) -> Option<&AccountPropertiesTransaction<Self>> {
        match transaction {
            Transaction::AccountPropertiesEntityType(inner) => Some(inner),
            _ => None,
        }
    }
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes an account properties transaction body.
pub fn decode_account_properties<V: PropertyValue>(
    reader: &mut Reader<'_>,
) -> Result<AccountPropertiesTransaction<V>, DecodeError> {
    let property_type = PropertyType(reader.read_u8("property_type")?);
    let count = reader.read_u8("modification_count")? as usize;

    let mut modifications = Vec::with_capacity(count);
    for _ in 0..count {
        let modification_type = ModificationType(reader.read_u8("modification_type")?);
        let value = V::read(reader)?;
        modifications.push(PropertyModification {
            modification_type,
            value,
        });
    }

    Ok(AccountPropertiesTransaction {
        property_type,
        modifications,
    })
}

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes an account properties transaction body.
///
/// Fails before writing anything if the modification list does not fit the
/// one-byte count.
pub fn encode_account_properties<V: PropertyValue>(
    writer: &mut Writer,
    transaction: &AccountPropertiesTransaction<V>,
) -> Result<(), EncodeError> {
    let count = transaction.modifications.len();
    let count_byte = u8::try_from(count).map_err(|_| EncodeError::LengthExceedsLimit {
        field: "modifications",
        len: count,
        max: MAX_PROPERTY_MODIFICATIONS,
    })?;

    writer.write_u8(transaction.property_type.0);
    writer.write_u8(count_byte);
    for modification in &transaction.modifications {
        writer.write_u8(modification.modification_type.0);
        modification.value.write(writer);
    }
    Ok(())
}

/// Returns the encoded size of a transaction body.
pub fn encoded_size<V: PropertyValue>(transaction: &AccountPropertiesTransaction<V>) -> usize {
    2 + transaction.modifications.len() * (1 + V::SIZE)
}

// =============================================================================
// CODEC
// =============================================================================

/// Registry codec for one account properties variant.
pub struct AccountPropertiesCodec<V> {
    _value: PhantomData<fn() -> V>,
}

impl<V> AccountPropertiesCodec<V> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<V> Default for AccountPropertiesCodec<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for AccountPropertiesCodec<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountPropertiesCodec")
            .field("value", &std::any::type_name::<V>())
            .finish()
    }
}

/// Codec for address property transactions.
pub type AddressPropertiesCodec = AccountPropertiesCodec<Address>;
/// Codec for mosaic property transactions.
pub type MosaicPropertiesCodec = AccountPropertiesCodec<MosaicId>;
/// Codec for entity type property transactions.
pub type EntityTypePropertiesCodec = AccountPropertiesCodec<EntityType>;

impl<V: PropertyValue> TransactionCodec for AccountPropertiesCodec<V> {
    fn deserialize(&self, reader: &mut Reader<'_>) -> Result<Transaction, DecodeError> {
        decode_account_properties::<V>(reader).map(V::into_transaction)
    }

    fn serialize(&self, transaction: &Transaction, writer: &mut Writer) -> Result<(), EncodeError> {
        let inner = V::from_transaction(transaction).ok_or(EncodeError::TransactionKindMismatch {
            expected: V::ENTITY_TYPE,
            found: transaction.entity_type(),
        })?;
        writer.reserve(encoded_size(inner));
        encode_account_properties(writer, inner)
    }
}
