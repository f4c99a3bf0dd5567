//! Error types for Cookmate
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::RepositoryError;
use crate::domain::value_objects::{IngredientId, Quantity, QuantityMap, Unit};

/// Result type alias for Cookmate operations
pub type CookmateResult<T> = Result<T, CookmateError>;

/// Main error type for Cookmate operations
#[derive(Error, Debug)]
pub enum CookmateError {
    /// Caller supplied an argument the operation cannot accept
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Amount text is not a decimal number
    #[error("invalid amount '{input}': not a decimal number")]
    InvalidAmount { input: String },

    /// Unit text is not one of the supported symbols
    #[error("unknown unit '{input}' (expected one of: g, kg, ml, l, pcs)")]
    UnknownUnit { input: String },

    /// No conversion factor exists between the two units
    #[error("incompatible units: cannot convert {from} to {to}")]
    IncompatibleUnits { from: Unit, to: Unit },

    /// Subtraction (or consumption) would leave a negative quantity
    #[error("quantity {minuend} minus {subtrahend} would be negative")]
    NegativeQuantity {
        minuend: Quantity,
        subtrahend: Quantity,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow while computing {operation}")]
    ArithmeticOverflow { operation: &'static str },

    #[error("recipe '{key}' not found")]
    RecipeNotFound { key: String },

    #[error("ingredient '{key}' not found")]
    IngredientNotFound { key: String },

    #[error("no inventory item for ingredient '{key}'")]
    InventoryItemNotFound { key: String },

    #[error("recipe '{name}' already exists")]
    RecipeAlreadyExists { name: String },

    #[error("ingredient '{name}' already exists")]
    IngredientAlreadyExists { name: String },

    /// Ingredient is still referenced by recipes or inventory
    #[error("ingredient '{name}' is still in use by {}", .holders.join(", "))]
    IngredientInUse { name: String, holders: Vec<String> },

    /// Stock does not cover a cook; carries every deficit at once
    #[error("insufficient inventory: {} ingredient(s) short ({})", .missing.len(), MissingList(.missing))]
    InsufficientInventory { missing: QuantityMap },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Persistent store could not be read or written
    #[error("storage error at {path}: {message}")]
    Storage { path: PathBuf, message: String },

    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of [`CookmateError`] for adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    IncompatibleUnit,
    InsufficientInventory,
    NegativeResult,
    Storage,
}

impl ErrorKind {
    /// Stable snake_case name for machine-readable output
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::IncompatibleUnit => "incompatible_unit",
            ErrorKind::InsufficientInventory => "insufficient_inventory",
            ErrorKind::NegativeResult => "negative_result",
            ErrorKind::Storage => "storage",
        }
    }
}

impl CookmateError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CookmateError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CookmateError::InvalidArgument { .. }
            | CookmateError::InvalidAmount { .. }
            | CookmateError::UnknownUnit { .. }
            | CookmateError::DivisionByZero
            | CookmateError::ArithmeticOverflow { .. } => ErrorKind::Validation,
            CookmateError::RecipeNotFound { .. }
            | CookmateError::IngredientNotFound { .. }
            | CookmateError::InventoryItemNotFound { .. } => ErrorKind::NotFound,
            CookmateError::RecipeAlreadyExists { .. }
            | CookmateError::IngredientAlreadyExists { .. }
            | CookmateError::IngredientInUse { .. } => ErrorKind::Conflict,
            CookmateError::IncompatibleUnits { .. } => ErrorKind::IncompatibleUnit,
            CookmateError::InsufficientInventory { .. } => ErrorKind::InsufficientInventory,
            CookmateError::NegativeQuantity { .. } => ErrorKind::NegativeResult,
            CookmateError::Repository(err) => match err {
                RepositoryError::Duplicate { .. } => ErrorKind::Conflict,
                RepositoryError::Missing { .. } => ErrorKind::NotFound,
                RepositoryError::Backend { .. } => ErrorKind::Storage,
            },
            CookmateError::Storage { .. } | CookmateError::Config { .. } | CookmateError::Io(_) => {
                ErrorKind::Storage
            }
        }
    }

    /// Deficit map of an insufficient-inventory failure
    pub fn missing(&self) -> Option<&QuantityMap> {
        match self {
            CookmateError::InsufficientInventory { missing } => Some(missing),
            _ => None,
        }
    }
}

struct MissingList<'a>(&'a QuantityMap);

impl fmt::Display for MissingList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (id, qty)) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", short_id(id), qty)?;
        }
        Ok(())
    }
}

fn short_id(id: &IngredientId) -> String {
    id.to_string().chars().take(8).collect()
}
