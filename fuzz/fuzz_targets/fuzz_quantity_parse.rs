#![no_main]

use cookmate::domain::value_objects::{Quantity, Unit};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let _ = input.parse::<Unit>();
        if let Ok(qty) = input.parse::<Quantity>() {
            // Display output must parse back to the same quantity
            let again: Quantity = qty.to_string().parse().expect("display reparses");
            assert_eq!(again, qty);
        }
    }
});
