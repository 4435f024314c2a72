//! # Validation Module
//!
//! Input validation for the vending machine.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console shell                                                 │
//! │  └── parse_denomination ── rejects "7", "abc" before InsertMoney       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog construction                                          │
//! │  ├── validate_product_id / validate_product_name / validate_cost       │
//! │  └── duplicate ID check                                                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Type system                                                   │
//! │  └── Denomination is a closed enum, Money is unsigned                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vend_core::validation::{parse_denomination, validate_product_id};
//! use vend_core::Denomination;
//!
//! assert_eq!(parse_denomination("100kr").unwrap(), Denomination::HundredKr);
//! assert!(parse_denomination("7").is_err());
//! assert!(validate_product_id("D1").is_ok());
//! ```

use crate::error::ValidationError;
use crate::money::{Denomination, Money};
use crate::{MAX_PRODUCT_ID_LEN, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Customer Input
// =============================================================================

/// Parses a denomination typed by the customer.
///
/// Invalid input is rejected here and never reaches the money pool.
pub fn parse_denomination(input: &str) -> ValidationResult<Denomination> {
    input.parse()
}

// =============================================================================
// Catalog Rules
// =============================================================================

/// Validates a product ID.
///
/// ## Rules
/// - Must not be empty
/// - At most MAX_PRODUCT_ID_LEN characters
/// - Only letters, digits, hyphens and underscores
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product display name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a product cost. Free products are not sold by the machine.
pub fn validate_cost(cost: Money) -> ValidationResult<()> {
    if cost.is_zero() {
        return Err(ValidationError::MustBePositive {
            field: "cost".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_denomination() {
        assert_eq!(parse_denomination("1").unwrap(), Denomination::OneKr);
        assert_eq!(parse_denomination("1000kr").unwrap(), Denomination::ThousandKr);
        assert!(parse_denomination("").is_err());
        assert!(parse_denomination("3").is_err());
        assert!(parse_denomination("twenty").is_err());
    }

    #[test]
    fn test_parse_error_lists_allowed_values() {
        let err = parse_denomination("3").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"denomination must be one of: ["1", "5", "10", "20", "50", "100", "500", "1000"]"#
        );
    }

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("D1").is_ok());
        assert!(validate_product_id("snack_2").is_ok());

        assert!(validate_product_id("").is_err());
        assert!(validate_product_id("   ").is_err());
        assert!(validate_product_id("D 1").is_err());
        assert!(validate_product_id(&"X".repeat(MAX_PRODUCT_ID_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Soda").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_PRODUCT_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_cost() {
        assert!(validate_cost(Money::from_kr(15)).is_ok());
        assert_eq!(
            validate_cost(Money::zero()),
            Err(ValidationError::MustBePositive {
                field: "cost".to_string()
            })
        );
    }
}
