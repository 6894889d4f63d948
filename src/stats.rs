use crate::calendar::YearMonth;
use crate::models::{ActivityType, LIMITS, Remaining};
use crate::store::LogStore;

/// Quota left for `month`. Not clamped: over-logging shows up as a negative
/// number.
pub fn compute_remaining(month: YearMonth, store: &LogStore) -> Remaining {
    let mut fixed_used = 0i64;
    let mut credits_used = 0i64;

    for (_, entry) in store.entries_in_month(month) {
        match entry.activity_type {
            ActivityType::FixedClass => fixed_used += 1,
            ActivityType::CreditClass => credits_used += i64::from(entry.cost),
        }
    }

    Remaining {
        fixed_remaining: LIMITS.fixed_class - fixed_used,
        credits_remaining: LIMITS.credit_class - credits_used,
    }
}
