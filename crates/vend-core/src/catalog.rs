//! # Catalog
//!
//! The fixed, ordered list of products a machine sells. A catalog is
//! validated once at construction and never changes afterwards.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::product::Product;
use crate::validation::{validate_cost, validate_product_id, validate_product_name};

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting invalid entries and duplicate IDs.
    pub fn new(products: Vec<Product>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product_id(&product.id)?;
            validate_product_name(&product.name)?;
            validate_cost(product.cost)?;

            if !seen.insert(product.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "id".to_string(),
                    value: product.id.clone(),
                });
            }
        }

        Ok(Catalog { products })
    }

    /// The machine's standard stock: a soda, a bag of chips and a robot.
    pub fn reference() -> Self {
        Catalog {
            products: vec![
                Product::drink("D1", "Soda", "Cola", 20),
                Product::snack("S1", "Chips", "Potato", 15),
                Product::toy("T1", "Robot", "Electronic", 50),
            ],
        }
    }

    /// First product whose ID matches exactly.
    pub fn find(&self, id: &str) -> CoreResult<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_order() {
        let catalog = Catalog::reference();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["D1", "S1", "T1"]);
    }

    #[test]
    fn test_reference_catalog_passes_validation() {
        let products = Catalog::reference().iter().cloned().collect();
        assert_eq!(Catalog::new(products).unwrap().len(), 3);
    }

    #[test]
    fn test_find() {
        let catalog = Catalog::reference();
        assert_eq!(catalog.find("S1").unwrap().name, "Chips");
        assert_eq!(
            catalog.find("s1"),
            Err(CoreError::ProductNotFound("s1".to_string()))
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let err = Catalog::new(vec![
            Product::drink("D1", "Soda", "Cola", 20),
            Product::drink("D1", "Water", "Still", 10),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::Duplicate {
                field: "id".to_string(),
                value: "D1".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_invalid_entries() {
        assert!(Catalog::new(vec![Product::toy("", "Robot", "Electronic", 50)]).is_err());
        assert!(Catalog::new(vec![Product::toy("T1", " ", "Electronic", 50)]).is_err());
        assert!(Catalog::new(vec![Product::toy("T1", "Robot", "Electronic", 0)]).is_err());
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}
