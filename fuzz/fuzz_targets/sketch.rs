#![no_main]

use cardinality_sketch::Sketch;
use libfuzzer_sys::fuzz_target;
use wyhash::wyhash;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let split_index = wyhash(data, 0) as usize % data.len();
    let (first_half, second_half) = data.split_at(split_index);
    let precision = 4 + (data[0] % 15);

    let mut sketch1 = Sketch::new(precision).unwrap();
    for chunk in first_half.chunks(4) {
        sketch1.insert(chunk);
        assert!(sketch1.estimate() > 0);
        assert!(sketch1.size_of() > 0);
    }

    let mut sketch2 = Sketch::new(precision).unwrap();
    for chunk in second_half.chunks(4) {
        sketch2.insert(chunk);
        assert!(sketch2.estimate() > 0);
        assert!(sketch2.size_of() > 0);
    }

    let mut merged = sketch1.clone();
    merged.merge(&sketch2).unwrap();
    sketch2.merge(&sketch1).unwrap();
    assert_eq!(merged.estimate(), sketch2.estimate());

    let restored = Sketch::from_binary(&merged.marshal_binary()).unwrap();
    assert_eq!(restored, merged);
});
