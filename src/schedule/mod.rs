//! Credit-card installment projection.
//!
//! Expands one purchase into the consecutive calendar months its installments
//! fall in, rolling over year boundaries. Pure arithmetic over [`MonthKey`];
//! no I/O.

use crate::domain::MonthKey;
use crate::money::Money;

/// One projected installment: the calendar month it falls in and its share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installment {
    pub month: MonthKey,
    pub amount: Money,
}

/// Projects `count` installments of `per_installment` starting at `start`.
///
/// Returns exactly `count` entries in chronological order, one per
/// consecutive month. A degenerate `count == 0` yields a single zero-amount
/// entry at `start` rather than a fault.
pub fn installment_schedule(start: MonthKey, count: u32, per_installment: Money) -> Vec<Installment> {
    if count == 0 {
        return vec![Installment {
            month: start,
            amount: Money::ZERO,
        }];
    }
    (0..count)
        .map(|offset| Installment {
            month: start.plus_months(offset),
            amount: per_installment,
        })
        .collect()
}

/// Month of the final installment.
pub fn final_installment_month(start: MonthKey, count: u32) -> MonthKey {
    start.plus_months(count.saturating_sub(1))
}

/// Display label for the end of an installment plan, `MM/YYYY`.
pub fn end_of_plan_label(start: MonthKey, count: u32) -> String {
    let end = final_installment_month(start, count);
    format!("{:02}/{}", end.month, end.year)
}
