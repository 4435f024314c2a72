//! # Vending Service
//!
//! The vending machine state machine: catalog lookups, the money pool and
//! the purchase/change rules.
//!
//! ## Transaction Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │        insert_money(d)                 insert_money / purchase          │
//! │   ┌──────┐ ─────────────────► ┌──────────────┐ ◄───────┐               │
//! │   │ Idle │                    │ Accumulating │ ────────┘               │
//! │   └──────┘ ◄───────────────── └──────────────┘                         │
//! │              end_transaction()                                          │
//! │              (pool drained into ChangeReport, credit reset)             │
//! │                                                                         │
//! │   show_all / details: read-only, allowed in either state               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Credit vs. Pool
//! The pool holds the coins and notes currently in the machine; the credit
//! records how many kronor of them are spendable under the active policy.
//! A purchase debits the credit and takes the cost out of the pool, breaking
//! a larger note into change where needed. `end_transaction` hands back
//! whatever the pool still holds.
//!
//! ```text
//! insert 100 kr      pool {100 × 1}   credit 100 kr
//! purchase T1 (50)   pool {50 × 1}    credit  50 kr
//! purchase T1 (50)   pool {}          credit   0 kr
//! end_transaction    change []
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::{Denomination, Money};
use crate::pool::{ChangeReport, MoneyPool};
use crate::product::Product;
use crate::PRODUCT_NOT_FOUND_MESSAGE;

// =============================================================================
// Vending Trait
// =============================================================================

/// Operations a vending machine exposes to its front end.
pub trait Vending {
    /// One summary line per catalog product, in catalog order.
    fn show_all(&self) -> Vec<String>;

    /// Full description of a product, or the not-found message.
    fn details(&self, product_id: &str) -> String;

    /// Accepts one coin or note.
    fn insert_money(&mut self, denomination: Denomination);

    /// Buys a product with the available credit.
    fn purchase(&mut self, product_id: &str) -> CoreResult<Product>;

    /// Hands back everything in the pool and returns to idle.
    fn end_transaction(&mut self) -> ChangeReport;

    /// Which inserted money counts as credit on this machine.
    fn policy(&self) -> CreditPolicy;
}

// =============================================================================
// Credit Policy
// =============================================================================

/// Which inserted money counts towards purchases.
///
/// ## Policies
/// ```text
/// Inserted: 5 × 20 kr                 Inserted: 1 × 100 kr
///
/// HundredNotes   → credit 0 kr        HundredNotes   → credit 100 kr
/// TotalInserted  → credit 100 kr      TotalInserted  → credit 100 kr
/// ```
///
/// `HundredNotes` matches the classic machine, which only ever checked its
/// 100 kr note slot. `TotalInserted` credits the face value of everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreditPolicy {
    #[default]
    HundredNotes,
    TotalInserted,
}

impl CreditPolicy {
    /// Credit earned by inserting one `denomination`.
    pub fn credit_for(self, denomination: Denomination) -> Money {
        match self {
            CreditPolicy::HundredNotes if denomination == Denomination::HundredKr => {
                denomination.amount()
            }
            CreditPolicy::HundredNotes => Money::zero(),
            CreditPolicy::TotalInserted => denomination.amount(),
        }
    }

    /// Denomination a purchase is paid from first.
    pub fn preferred_tender(self) -> Option<Denomination> {
        match self {
            CreditPolicy::HundredNotes => Some(Denomination::HundredKr),
            CreditPolicy::TotalInserted => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CreditPolicy::HundredNotes => "hundred-notes",
            CreditPolicy::TotalInserted => "total-inserted",
        }
    }
}

impl fmt::Display for CreditPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CreditPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hundred-notes" => Ok(CreditPolicy::HundredNotes),
            "total-inserted" => Ok(CreditPolicy::TotalInserted),
            _ => Err(ValidationError::NotAllowed {
                field: "credit policy".to_string(),
                allowed: vec![
                    CreditPolicy::HundredNotes.to_string(),
                    CreditPolicy::TotalInserted.to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Transaction State
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionState {
    /// No money inserted since the last settlement.
    Idle,
    /// Money inserted; zero or more purchases made.
    Accumulating,
}

// =============================================================================
// Vending Service
// =============================================================================

#[derive(Debug, Clone)]
pub struct VendingService {
    catalog: Catalog,
    pool: MoneyPool,
    credit: Money,
    policy: CreditPolicy,
    state: TransactionState,
}

impl VendingService {
    pub fn new(catalog: Catalog, policy: CreditPolicy) -> Self {
        VendingService {
            catalog,
            pool: MoneyPool::new(),
            credit: Money::zero(),
            policy,
            state: TransactionState::Idle,
        }
    }

    /// Looks up a product without side effects.
    pub fn find(&self, product_id: &str) -> CoreResult<&Product> {
        self.catalog.find(product_id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn pool(&self) -> &MoneyPool {
        &self.pool
    }

    /// Kronor still spendable in this transaction.
    pub fn available_credit(&self) -> Money {
        self.credit
    }

    pub fn state(&self) -> TransactionState {
        self.state
    }
}

impl Default for VendingService {
    fn default() -> Self {
        VendingService::new(Catalog::reference(), CreditPolicy::default())
    }
}

impl Vending for VendingService {
    fn show_all(&self) -> Vec<String> {
        self.catalog.iter().map(Product::summary).collect()
    }

    fn details(&self, product_id: &str) -> String {
        self.find(product_id)
            .map(Product::examine)
            .unwrap_or_else(|_| PRODUCT_NOT_FOUND_MESSAGE.to_string())
    }

    fn insert_money(&mut self, denomination: Denomination) {
        self.pool.insert(denomination);
        self.credit += self.policy.credit_for(denomination);
        self.state = TransactionState::Accumulating;

        debug!(
            denomination = denomination.value(),
            credit = self.credit.kr(),
            "Money inserted"
        );
    }

    fn purchase(&mut self, product_id: &str) -> CoreResult<Product> {
        let product = self.catalog.find(product_id)?;

        let Some(remaining) = self.credit.checked_sub(product.cost) else {
            debug!(
                product_id,
                cost = product.cost.kr(),
                credit = self.credit.kr(),
                "Purchase refused"
            );
            return Err(CoreError::InsufficientFunds {
                id: product.id.clone(),
                cost: product.cost,
                available: self.credit,
            });
        };

        if !self.pool.pay(product.cost, self.policy.preferred_tender()) {
            return Err(CoreError::InsufficientFunds {
                id: product.id.clone(),
                cost: product.cost,
                available: self.pool.total(),
            });
        }

        let product = product.clone();
        self.credit = remaining;

        info!(
            product_id,
            cost = product.cost.kr(),
            credit = remaining.kr(),
            "Product dispensed"
        );
        Ok(product)
    }

    fn end_transaction(&mut self) -> ChangeReport {
        let change = self.pool.drain();
        self.credit = Money::zero();
        self.state = TransactionState::Idle;

        info!(
            entries = change.entries().len(),
            total = change.total().kr(),
            "Transaction ended"
        );
        change
    }

    fn policy(&self) -> CreditPolicy {
        self.policy
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
