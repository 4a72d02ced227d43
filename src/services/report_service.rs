//! Orchestrates the monthly report: reads the persisted income and expense
//! documents and runs one aggregation pass over them.

use chrono::NaiveDate;
use tracing::debug;

use crate::report::{build_report, Report};
use crate::storage::ExpenseStore;

use super::ServiceResult;

pub struct ReportService;

impl ReportService {
    /// Builds the income/expense report for `today`'s calendar month.
    pub fn monthly_report(
        store: &dyn ExpenseStore,
        user: &str,
        today: NaiveDate,
    ) -> ServiceResult<Report> {
        let income = store.monthly_income(user)?;
        let expenses = store.list_expenses(user)?;
        debug!(user, records = expenses.len(), "building monthly report");
        Ok(build_report(&expenses, income.as_ref(), today))
    }
}
