//! Business logic helpers for managing a user's expense collection.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Category, ExpenseRecord};
use crate::money::Money;
use crate::storage::ExpenseStore;

use super::{ServiceError, ServiceResult};

/// Provides validated CRUD helpers over an [`ExpenseStore`].
pub struct ExpenseService;

impl ExpenseService {
    /// Records a fixed expense and returns its identifier.
    pub fn add_fixed(
        store: &dyn ExpenseStore,
        user: &str,
        description: &str,
        amount: Money,
        category: Category,
        purchase_date: NaiveDate,
    ) -> ServiceResult<Uuid> {
        let description = validate_description(description)?;
        validate_amount(amount)?;
        let record = ExpenseRecord::fixed(description, amount, category, purchase_date);
        Ok(store.add_expense(user, record)?)
    }

    /// Records a credit-card expense split across `installments` months.
    #[allow(clippy::too_many_arguments)]
    pub fn add_credit_card(
        store: &dyn ExpenseStore,
        user: &str,
        description: &str,
        amount: Money,
        category: Category,
        purchase_date: NaiveDate,
        installments: u32,
    ) -> ServiceResult<Uuid> {
        let description = validate_description(description)?;
        validate_amount(amount)?;
        if installments == 0 {
            return Err(ServiceError::Invalid(
                "Installment count must be at least 1".into(),
            ));
        }
        let record =
            ExpenseRecord::credit_card(description, amount, category, purchase_date, installments);
        Ok(store.add_expense(user, record)?)
    }

    /// Updates the expense identified by `id` via the provided mutator.
    pub fn update<F>(store: &dyn ExpenseStore, user: &str, id: Uuid, mutator: F) -> ServiceResult<()>
    where
        F: FnOnce(&mut ExpenseRecord),
    {
        let mut record = store
            .get_expense(user, id)?
            .ok_or_else(|| ServiceError::Invalid("Expense not found".into()))?;
        mutator(&mut record);
        record.id = id;
        record.description = validate_description(&record.description)?;
        validate_amount(record.amount)?;
        store.update_expense(user, record)?;
        Ok(())
    }

    /// Removes the expense identified by `id`.
    pub fn remove(store: &dyn ExpenseStore, user: &str, id: Uuid) -> ServiceResult<()> {
        store.delete_expense(user, id)?;
        Ok(())
    }

    /// Returns the user's expenses, most recent purchase first. Records
    /// without a purchase date sort ahead of dated ones, matching the
    /// history listing.
    pub fn list(store: &dyn ExpenseStore, user: &str) -> ServiceResult<Vec<ExpenseRecord>> {
        let mut records = store.list_expenses(user)?;
        records.sort_by_key(|record| {
            std::cmp::Reverse(record.purchase_date.unwrap_or(NaiveDate::MAX))
        });
        Ok(records)
    }
}

fn validate_description(description: &str) -> Result<String, ServiceError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::Invalid(
            "Expense description is required".into(),
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_amount(amount: Money) -> Result<(), ServiceError> {
    if amount < Money::ZERO {
        return Err(ServiceError::Invalid(
            "Expense amount cannot be negative".into(),
        ));
    }
    Ok(())
}
