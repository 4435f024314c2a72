//! # Products
//!
//! A product is a shared shape (ID, name, cost) plus a kind-specific detail.
//!
//! ## Type Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Product                                         │
//! │  ─────────────────────────────────────                                 │
//! │  id      "D1"          (business key, unique in a catalog)             │
//! │  name    "Soda"                                                         │
//! │  cost    20 kr                                                          │
//! │  kind ──┬── Drink { flavor }     "Enjoy your Cola drink!"              │
//! │         ├── Snack { snack_type } "Enjoy your Potato snack!"            │
//! │         └── Toy   { category }   "Play with your Electronic toy!"      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product Kind
// =============================================================================

/// What kind of product this is, with the detail specific to that kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProductKind {
    Drink { flavor: String },
    Snack { snack_type: String },
    Toy { category: String },
}

impl ProductKind {
    /// Label used in descriptions ("Drink", "Snack", "Toy").
    pub const fn label(&self) -> &'static str {
        match self {
            ProductKind::Drink { .. } => "Drink",
            ProductKind::Snack { .. } => "Snack",
            ProductKind::Toy { .. } => "Toy",
        }
    }

    /// Name of the kind-specific field as shown to customers.
    pub const fn detail_label(&self) -> &'static str {
        match self {
            ProductKind::Drink { .. } => "Flavor",
            ProductKind::Snack { .. } => "Type",
            ProductKind::Toy { .. } => "Category",
        }
    }

    /// Value of the kind-specific field.
    pub fn detail(&self) -> &str {
        match self {
            ProductKind::Drink { flavor } => flavor,
            ProductKind::Snack { snack_type } => snack_type,
            ProductKind::Toy { category } => category,
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product sold by the machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier typed by the customer, e.g. `"D1"`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in whole kronor.
    pub cost: Money,

    #[serde(flatten)]
    pub kind: ProductKind,
}

impl Product {
    pub fn drink(id: &str, name: &str, flavor: &str, cost: u64) -> Self {
        Self::new(id, name, cost, ProductKind::Drink { flavor: flavor.to_string() })
    }

    pub fn snack(id: &str, name: &str, snack_type: &str, cost: u64) -> Self {
        Self::new(id, name, cost, ProductKind::Snack { snack_type: snack_type.to_string() })
    }

    pub fn toy(id: &str, name: &str, category: &str, cost: u64) -> Self {
        Self::new(id, name, cost, ProductKind::Toy { category: category.to_string() })
    }

    fn new(id: &str, name: &str, cost: u64, kind: ProductKind) -> Self {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            cost: Money::from_kr(cost),
            kind,
        }
    }

    /// Full description, e.g. `"Drink: Soda, Flavor: Cola, Cost: 20 kr"`.
    pub fn examine(&self) -> String {
        format!(
            "{}: {}, {}: {}, Cost: {}",
            self.kind.label(),
            self.name,
            self.kind.detail_label(),
            self.kind.detail(),
            self.cost
        )
    }

    /// Message printed after the product is dispensed.
    pub fn use_message(&self) -> String {
        match &self.kind {
            ProductKind::Drink { flavor } => format!("Enjoy your {flavor} drink!"),
            ProductKind::Snack { snack_type } => format!("Enjoy your {snack_type} snack!"),
            ProductKind::Toy { category } => format!("Play with your {category} toy!"),
        }
    }

    /// One-line listing entry, e.g. `"Id: D1, Name: Soda, Cost: 20 kr"`.
    pub fn summary(&self) -> String {
        format!("Id: {}, Name: {}, Cost: {}", self.id, self.name, self.cost)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examine_per_kind() {
        assert_eq!(
            Product::drink("D1", "Soda", "Cola", 20).examine(),
            "Drink: Soda, Flavor: Cola, Cost: 20 kr"
        );
        assert_eq!(
            Product::snack("S1", "Chips", "Potato", 15).examine(),
            "Snack: Chips, Type: Potato, Cost: 15 kr"
        );
        assert_eq!(
            Product::toy("T1", "Robot", "Electronic", 50).examine(),
            "Toy: Robot, Category: Electronic, Cost: 50 kr"
        );
    }

    #[test]
    fn test_use_message_per_kind() {
        assert_eq!(
            Product::drink("D1", "Soda", "Cola", 20).use_message(),
            "Enjoy your Cola drink!"
        );
        assert_eq!(
            Product::snack("S1", "Chips", "Potato", 15).use_message(),
            "Enjoy your Potato snack!"
        );
        assert_eq!(
            Product::toy("T1", "Robot", "Electronic", 50).use_message(),
            "Play with your Electronic toy!"
        );
    }

    #[test]
    fn test_summary() {
        let soda = Product::drink("D1", "Soda", "Cola", 20);
        assert_eq!(soda.summary(), "Id: D1, Name: Soda, Cost: 20 kr");
    }

    #[test]
    fn test_serialized_shape() {
        let chips = Product::snack("S1", "Chips", "Potato", 15);
        let json = serde_json::to_value(&chips).unwrap();
        assert_eq!(json["kind"], "snack");
        assert_eq!(json["snack_type"], "Potato");
        assert_eq!(json["cost"], 15);
    }
}
