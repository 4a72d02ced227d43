//! Business logic helpers for the single monthly income document.

use crate::domain::MonthlyIncome;
use crate::money::Money;
use crate::storage::ExpenseStore;

use super::{ServiceError, ServiceResult};

pub struct IncomeService;

impl IncomeService {
    /// Currently configured income, if any.
    pub fn current(store: &dyn ExpenseStore, user: &str) -> ServiceResult<Option<MonthlyIncome>> {
        Ok(store.monthly_income(user)?)
    }

    /// Creates or overwrites the income document.
    pub fn save(store: &dyn ExpenseStore, user: &str, amount: Money) -> ServiceResult<MonthlyIncome> {
        if amount < Money::ZERO {
            return Err(ServiceError::Invalid(
                "Monthly income cannot be negative".into(),
            ));
        }
        let income = MonthlyIncome::new(amount);
        store.set_monthly_income(user, income.clone())?;
        Ok(income)
    }

    /// Deletes the income document; reporting becomes unavailable afterwards.
    pub fn clear(store: &dyn ExpenseStore, user: &str) -> ServiceResult<()> {
        store.clear_monthly_income(user)?;
        Ok(())
    }
}
