//! # Money Pool
//!
//! Counts of coins and notes currently held for the open transaction.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MoneyPool.counts: [u32; 8]  (index = Denomination::index())           │
//! │                                                                         │
//! │   1kr  5kr  10kr  20kr  50kr  100kr  500kr  1000kr                      │
//! │  ┌────┬────┬─────┬─────┬─────┬──────┬──────┬───────┐                    │
//! │  │ 0  │ 0  │  0  │  2  │  0  │  1   │  0   │   0   │  ◄── insert()      │
//! │  └────┴────┴─────┴─────┴─────┴──────┴──────┴───────┘                    │
//! │                        │                                                │
//! │                        ▼ drain()                                        │
//! │  ChangeReport: [(100 kr, 1), (20 kr, 2)]   (descending, nonzero only)   │
//! │  MoneyPool:    all zero                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every denomination has a slot from construction on, so lookups can never
//! miss and counts can never go negative.

use serde::{Deserialize, Serialize};

use crate::money::{Denomination, Money};

// =============================================================================
// Money Pool
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoneyPool {
    counts: [u32; Denomination::COUNT],
}

impl MoneyPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one coin or note.
    pub fn insert(&mut self, denomination: Denomination) {
        self.counts[denomination.index()] += 1;
    }

    pub fn count(&self, denomination: Denomination) -> u32 {
        self.counts[denomination.index()]
    }

    /// Face value of everything held.
    pub fn total(&self) -> Money {
        Denomination::ALL
            .into_iter()
            .fold(Money::zero(), |acc, d| acc + d.amount() * self.count(d))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Takes `amount` out of the pool.
    ///
    /// Notes of the `preferred` denomination go first. After that the
    /// smallest note covering what is still due is taken, or the largest
    /// note when none covers it. Any overpayment is broken back into the
    /// pool, largest denominations first.
    ///
    /// Returns `false` and leaves the pool untouched if it holds less than
    /// `amount`.
    ///
    /// ```text
    /// pool {100 kr × 1}, pay(50 kr, Some(100 kr))
    ///   take 100 kr ──► overpaid 50 kr ──► insert 50 kr
    /// pool {50 kr × 1}
    /// ```
    pub fn pay(&mut self, amount: Money, preferred: Option<Denomination>) -> bool {
        if self.total() < amount {
            return false;
        }

        let mut paid = Money::zero();

        if let Some(d) = preferred {
            while paid < amount && self.count(d) > 0 {
                self.take(d);
                paid += d.amount();
            }
        }

        while let Some(due) = amount.checked_sub(paid).filter(|due| !due.is_zero()) {
            let held = || Denomination::ALL.into_iter().filter(|&d| self.count(d) > 0);
            let Some(note) = held()
                .find(|d| d.amount() >= due)
                .or_else(|| held().last())
            else {
                break;
            };
            self.take(note);
            paid += note.amount();
        }

        let mut overpaid = paid.checked_sub(amount).unwrap_or_default();
        for d in Denomination::descending() {
            while overpaid >= d.amount() {
                self.insert(d);
                overpaid = overpaid.checked_sub(d.amount()).unwrap_or_default();
            }
        }

        true
    }

    fn take(&mut self, denomination: Denomination) {
        self.counts[denomination.index()] -= 1;
    }

    /// Empties the pool, returning what it held as a change report.
    pub fn drain(&mut self) -> ChangeReport {
        let entries = Denomination::descending()
            .filter(|&d| self.count(d) > 0)
            .map(|d| ChangeEntry {
                denomination: d,
                count: self.count(d),
            })
            .collect();

        self.counts = [0; Denomination::COUNT];
        ChangeReport { entries }
    }
}

// =============================================================================
// Change Report
// =============================================================================

/// One line of change: `count` coins/notes of `denomination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    pub denomination: Denomination,
    pub count: u32,
}

impl ChangeEntry {
    /// `"100 kr: 1 notes"`
    pub fn line(&self) -> String {
        format!("{}: {} notes", self.denomination, self.count)
    }
}

/// Money handed back at the end of a transaction.
///
/// ## Invariants
/// - Entries are in descending denomination order
/// - Every entry has a count greater than zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeReport {
    entries: Vec<ChangeEntry>,
}

impl ChangeReport {
    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count returned for one denomination (0 if absent).
    pub fn count(&self, denomination: Denomination) -> u32 {
        self.entries
            .iter()
            .find(|e| e.denomination == denomination)
            .map_or(0, |e| e.count)
    }

    pub fn total(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::zero(), |acc, e| acc + e.denomination.amount() * e.count)
    }

    /// Printable lines, one per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ChangeEntry::line).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
