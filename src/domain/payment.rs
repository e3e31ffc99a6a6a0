//! Payment entities: checkout sessions and transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{CHECKOUT_SESSION_PARAM, HOSTED_CHECKOUT_BASE_URL};

/// Transaction lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Paid,
    Cancelled,
}

/// A payment transaction for a course purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub amount_cents: i64,
    pub status: TransactionStatus,
    /// Checkout session this transaction originated from
    pub session_id: String,
    pub created_at: DateTime<Utc>,
}

/// A checkout session pointing at the payment processor's hosted page.
///
/// The return trip lands on the local success/cancel routes carrying
/// `session_id` as a query parameter, which is exchanged with the backend
/// for the transaction status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub session_id: String,
    pub redirect_url: String,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub amount_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl CheckoutSession {
    pub fn new(user_id: Uuid, course_id: Uuid, amount_cents: i64) -> Self {
        let session_id = Uuid::new_v4().simple().to_string();
        let redirect_url = format!(
            "{}?{}={}",
            HOSTED_CHECKOUT_BASE_URL, CHECKOUT_SESSION_PARAM, session_id
        );

        Self {
            session_id,
            redirect_url,
            user_id,
            course_id,
            amount_cents,
            created_at: Utc::now(),
        }
    }

    /// Build the transaction for this checkout in the given state
    pub fn into_transaction(self, status: TransactionStatus) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            course_id: self.course_id,
            amount_cents: self.amount_cents,
            status,
            session_id: self.session_id,
            created_at: Utc::now(),
        }
    }
}
