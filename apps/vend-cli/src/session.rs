//! # Session Receipt
//!
//! A session is one run of the shell: from the first prompt until the
//! customer types `exit`. It gets a UUID for log correlation and a start
//! time; both end up on the JSON change receipt.
//!
//! ```json
//! {
//!   "session_id": "1b4e28ba-2fa1-11d2-883f-0016d3cca427",
//!   "started_at": "2026-10-17T09:30:00Z",
//!   "ended_at": "2026-10-17T09:31:12Z",
//!   "credit_policy": "hundred-notes",
//!   "change": { "entries": [ { "denomination": 100, "count": 1 } ] },
//!   "total": 100
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vend_core::{ChangeReport, CreditPolicy, Money};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
}

impl Session {
    pub fn start() -> Self {
        Session {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
        }
    }

    /// Closes the session with the change handed back.
    pub fn receipt(&self, credit_policy: CreditPolicy, change: ChangeReport) -> SessionReceipt {
        SessionReceipt {
            session_id: self.id,
            started_at: self.started_at,
            ended_at: Utc::now(),
            credit_policy,
            total: change.total(),
            change,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReceipt {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub credit_policy: CreditPolicy,
    pub change: ChangeReport,
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vend_core::{Denomination, MoneyPool};

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(Session::start().id, Session::start().id);
    }

    #[test]
    fn test_receipt_totals_change() {
        let mut pool = MoneyPool::new();
        pool.insert(Denomination::HundredKr);
        pool.insert(Denomination::TenKr);

        let session = Session::start();
        let receipt = session.receipt(CreditPolicy::HundredNotes, pool.drain());

        assert_eq!(receipt.session_id, session.id);
        assert_eq!(receipt.total, Money::from_kr(110));
        assert!(receipt.ended_at >= receipt.started_at);
    }

    #[test]
    fn test_receipt_json_shape() {
        let receipt = Session::start().receipt(CreditPolicy::TotalInserted, ChangeReport::default());
        let json = serde_json::to_value(&receipt).unwrap();

        assert_eq!(json["credit_policy"], "total-inserted");
        assert_eq!(json["total"], 0);
        assert_eq!(json["change"]["entries"], serde_json::json!([]));
    }
}
