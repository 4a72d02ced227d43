use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The user's single monthly income document.
///
/// One value per user, overwritten on save rather than versioned. Absence
/// means income was never configured, which the report engine treats as
/// "reporting unavailable", not as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyIncome {
    pub amount: Money,
    pub updated_at: DateTime<Utc>,
}

impl MonthlyIncome {
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            updated_at: Utc::now(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.amount.is_positive()
    }
}
