//! Error types for Card Vault

use thiserror::Error;

/// Main error type for Card Vault operations
#[derive(Error, Debug)]
pub enum VaultError {
    /// No card or NFT with this id exists in the registry
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// No user with this id exists in the directory
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The item belongs to someone other than the acting user
    #[error("Item {id} is owned by {owner}")]
    NotOwner { id: String, owner: String },

    /// The acting user already owns the item (e.g. buying your own listing)
    #[error("Item {0} is already owned by the current user")]
    AlreadyOwner(String),

    /// The item is not in the list the operation works on
    #[error("Item {id} is {actual}, expected {expected}")]
    WrongStatus {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Sale prices must be positive and finite
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// An item with this id is already registered
    #[error("Duplicate item: {0}")]
    DuplicateItem(String),

    /// Gift or trade targeting the acting user
    #[error("Cannot transfer to yourself: {0}")]
    SelfTransfer(String),

    /// Trade offer was not found (or is no longer valid)
    #[error("Trade offer not found: {0}")]
    OfferNotFound(String),

    /// Only the recipient of an offer may accept it
    #[error("Trade offer {0} is addressed to another user")]
    NotRecipient(String),

    /// Stored or seeded preference value that is not a known variant
    #[error("Invalid value for preference {key}: {value}")]
    InvalidPreference { key: &'static str, value: String },

    /// The user directory must not be empty or contain duplicate ids
    #[error("Invalid user directory: {0}")]
    InvalidDirectory(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using VaultError
pub type VaultResult<T> = Result<T, VaultError>;
