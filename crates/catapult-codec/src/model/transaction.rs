//! Transaction records produced by decoding and consumed by encoding.

use crate::model::{AccountPropertiesTransaction, Address, EntityType, MosaicId};

/// A decoded transaction body, tagged by its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    AccountPropertiesAddress(AccountPropertiesTransaction<Address>),
    AccountPropertiesMosaic(AccountPropertiesTransaction<MosaicId>),
    AccountPropertiesEntityType(AccountPropertiesTransaction<EntityType>),
}

impl Transaction {
    /// Returns the entity type discriminator for this transaction.
    pub fn entity_type(&self) -> EntityType {
        match self {
            Transaction::AccountPropertiesAddress(_) => EntityType::ACCOUNT_PROPERTIES_ADDRESS,
            Transaction::AccountPropertiesMosaic(_) => EntityType::ACCOUNT_PROPERTIES_MOSAIC,
            Transaction::AccountPropertiesEntityType(_) => {
                EntityType::ACCOUNT_PROPERTIES_ENTITY_TYPE
            }
        }
    }
}

impl From<AccountPropertiesTransaction<Address>> for Transaction {
    fn from(transaction: AccountPropertiesTransaction<Address>) -> Self {
        Transaction::AccountPropertiesAddress(transaction)
    }
}

impl From<AccountPropertiesTransaction<MosaicId>> for Transaction {
    fn from(transaction: AccountPropertiesTransaction<MosaicId>) -> Self {
        Transaction::AccountPropertiesMosaic(transaction)
    }
}

impl From<AccountPropertiesTransaction<EntityType>> for Transaction {
    fn from(transaction: AccountPropertiesTransaction<EntityType>) -> Self {
        Transaction::AccountPropertiesEntityType(transaction)
    }
}
