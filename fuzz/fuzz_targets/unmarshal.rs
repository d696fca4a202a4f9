#![no_main]

use cardinality_sketch::Sketch;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut sketch) = Sketch::from_binary(data) {
        let estimate = sketch.estimate();
        let restored = Sketch::from_binary(&sketch.marshal_binary()).unwrap();
        assert_eq!(restored.estimate(), estimate);

        sketch.insert(b"fuzz");
        assert!(sketch.estimate() > 0);
    }
});
