use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::money::Money;

use super::category::Category;

/// A single expense document as persisted in a user's expense collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub description: String,
    /// Full purchase value; credit-card records spread it across installments.
    pub amount: Money,
    pub category: Category,
    pub kind: ExpenseKind,
    /// `None` when the stored date is absent or unparseable. Such records are
    /// skipped by the aggregation engine instead of aborting it.
    #[serde(default, deserialize_with = "lenient_date")]
    pub purchase_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl ExpenseRecord {
    pub fn fixed(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category,
            kind: ExpenseKind::Fixed,
            purchase_date: Some(purchase_date),
            created_at: Utc::now(),
        }
    }

    pub fn credit_card(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        purchase_date: NaiveDate,
        installments: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category,
            kind: ExpenseKind::CreditCard { installments },
            purchase_date: Some(purchase_date),
            created_at: Utc::now(),
        }
    }

    pub fn is_credit_card(&self) -> bool {
        matches!(self.kind, ExpenseKind::CreditCard { .. })
    }

    /// Number of monthly installments the amount is spread across.
    /// Fixed expenses land in exactly one month.
    pub fn installment_count(&self) -> u32 {
        match self.kind {
            ExpenseKind::Fixed => 1,
            ExpenseKind::CreditCard { installments } => installments,
        }
    }

    /// Even per-installment share of the amount (zero for a degenerate
    /// installment count).
    pub fn installment_amount(&self) -> Money {
        self.amount.split(self.installment_count())
    }
}

/// How an expense hits the monthly cash flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseKind {
    /// Paid in full in the purchase month.
    Fixed,
    /// Split evenly across `installments` consecutive months.
    CreditCard { installments: u32 },
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| NaiveDate::parse_from_str(&value, "%Y-%m-%d").ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installment_amount_splits_card_total() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let record = ExpenseRecord::credit_card(
            "Headphones",
            Money::from_cents(30_000),
            Category::Other,
            date,
            3,
        );
        assert_eq!(record.installment_count(), 3);
        assert_eq!(record.installment_amount(), Money::from_cents(10_000));
    }

    #[test]
    fn fixed_record_has_single_installment() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let record =
            ExpenseRecord::fixed("Groceries", Money::from_cents(15_000), Category::Food, date);
        assert_eq!(record.installment_count(), 1);
        assert_eq!(record.installment_amount(), record.amount);
    }

    #[test]
    fn unparseable_date_deserializes_as_none() {
        let json = r#"{
            "id": "4b4d9a5e-91f7-4b8e-8f0d-0a4f5f3f6b1a",
            "description": "Broken",
            "amount": 100,
            "category": "Other",
            "kind": "Fixed",
            "purchase_date": "not-a-date",
            "created_at": "2025-01-01T00:00:00Z"
        }"#;
        let record: ExpenseRecord = serde_json::from_str(json).expect("record decodes");
        assert!(record.purchase_date.is_none());
    }

    #[test]
    fn valid_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 5).unwrap();
        let record =
            ExpenseRecord::fixed("Rent", Money::from_cents(90_000), Category::Housing, date);
        let json = serde_json::to_string(&record).expect("record encodes");
        let decoded: ExpenseRecord = serde_json::from_str(&json).expect("record decodes");
        assert_eq!(decoded.purchase_date, Some(date));
    }
}
