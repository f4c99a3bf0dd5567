#![no_main]

use cookmate::infrastructure::toml_store::KitchenDocument;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Hand-edited store files: decode and re-validate without panicking
        if let Ok(doc) = toml::from_str::<KitchenDocument>(content) {
            let _ = doc.into_state();
        }
    }
});
