use crate::types::BudgetTier;

/// Per-person spend for one day, in whole dollars.
pub fn daily_estimate(budget: BudgetTier) -> u64 {
    match budget {
        BudgetTier::Budget => 35,
        BudgetTier::MidRange => 100,
        BudgetTier::Luxury => 200,
    }
}

/// Whole-trip cost range for the group, e.g. `$1,200 - $1,440`.
///
/// The upper bound adds 20% headroom, rounded down.
pub fn estimate_trip_cost(budget: BudgetTier, num_people: u32, num_days: u32) -> String {
    let total = daily_estimate(budget) * u64::from(num_people) * u64::from(num_days);
    let upper = total * 12 / 10;
    format!("${} - ${}", group_thousands(total), group_thousands(upper))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
