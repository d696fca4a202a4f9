#![no_main]

use cardinality_sketch::Sketch;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut sketch) = serde_json::from_slice::<Sketch>(data) {
        sketch.insert_item(&1);
        assert!(sketch.estimate() > 0);
    }
});
