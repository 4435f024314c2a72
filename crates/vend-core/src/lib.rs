//! # vend-core: Pure Business Logic for the Vending Machine
//!
//! This crate is the **heart** of the vending machine. It holds the catalog,
//! the money pool and the purchase/change rules with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vend Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    vend-cli (console shell)                     │   │
//! │  │    Product list ──► Product ID ──► Denomination ──► Change      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Vending trait                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vend-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   money   │  │   pool    │  │  service  │  │   │
//! │  │   │  Product  │  │   Money   │  │ MoneyPool │  │ Vending   │  │   │
//! │  │   │  Catalog  │  │   Denom.  │  │  Change   │  │  Service  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Money` amounts and the closed `Denomination` set
//! - [`product`] - Product kinds and their describe/use capability
//! - [`catalog`] - The fixed, ordered product list
//! - [`pool`] - Per-denomination note counts and change reports
//! - [`service`] - The `Vending` trait and `VendingService` state machine
//! - [`error`] - Domain error types
//! - [`validation`] - Input parsing and catalog rules
//!
//! ## Example Usage
//!
//! ```rust
//! use vend_core::{Denomination, Vending, VendingService};
//!
//! let mut machine = VendingService::default();
//! machine.insert_money(Denomination::HundredKr);
//!
//! let robot = machine.purchase("T1").unwrap();
//! assert_eq!(robot.use_message(), "Play with your Electronic toy!");
//!
//! let change = machine.end_transaction();
//! assert_eq!(change.lines(), vec!["50 kr: 1 notes".to_string()]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pool;
pub mod product;
pub mod service;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Denomination, Money};
pub use pool::{ChangeEntry, ChangeReport, MoneyPool};
pub use product::{Product, ProductKind};
pub use service::{CreditPolicy, TransactionState, Vending, VendingService};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Message returned by `details` when no catalog entry matches.
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found.";

/// Maximum length of a product ID.
pub const MAX_PRODUCT_ID_LEN: usize = 16;

/// Maximum length of a product display name.
pub const MAX_PRODUCT_NAME_LEN: usize = 64;
