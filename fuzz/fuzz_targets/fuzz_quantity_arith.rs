#![no_main]

use cookmate::domain::value_objects::{Quantity, Unit};
use libfuzzer_sys::fuzz_target;

fn quantity(amount: i64, scale: u8, unit: u8) -> Option<Quantity> {
    let amount = rust_decimal::Decimal::try_new(amount, u32::from(scale % 10)).ok()?;
    Some(Quantity::new(amount, Unit::ALL[usize::from(unit) % Unit::ALL.len()]))
}

fuzz_target!(|input: (i64, u8, u8, i64, u8, u8)| {
    let (a, sa, ua, b, sb, ub) = input;
    let (Some(lhs), Some(rhs)) = (quantity(a, sa, ua), quantity(b, sb, ub)) else {
        return;
    };
    // Errors are fine; panics and negative results are not
    if let Ok(diff) = lhs.checked_sub(&rhs) {
        assert!(!diff.is_negative());
    }
    let _ = lhs.checked_add(&rhs);
    let _ = lhs.try_cmp(&rhs);
    for unit in Unit::ALL {
        let _ = lhs.to(unit);
    }
});
