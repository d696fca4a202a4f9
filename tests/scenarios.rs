use std::fmt::Write;

use cardinality_sketch::{LogLogBeta, Sketch, SketchConfig, SketchError};
use test_case::test_case;

fn sketch_of(precision: u8, items: impl Iterator<Item = String>) -> Sketch {
    let mut sketch = Sketch::new(precision).unwrap();
    for item in items {
        sketch.insert(item.as_bytes());
    }
    sketch
}

fn relative_error(estimate: u64, expected: usize) -> f64 {
    (estimate as f64 - expected as f64).abs() / expected as f64
}

#[test]
fn test_duplicates_ignored() {
    let mut sketch = Sketch::new(14).unwrap();
    for name in ["alice", "bob", "charlie", "alice"] {
        sketch.insert(name.as_bytes());
    }
    assert_eq!(sketch.estimate(), 3);
}

#[test]
fn test_distributed_counting() {
    let a = sketch_of(14, (0..500).map(|i| format!("item-{i}")));
    let b = sketch_of(14, (250..750).map(|i| format!("item-{i}")));

    let mut union = a.clone();
    union.merge(&b).unwrap();
    assert!(
        relative_error(union.estimate(), 750) < 0.01,
        "estimate {}",
        union.estimate()
    );

    // inputs are left untouched
    assert!(relative_error(a.estimate(), 500) < 0.01);
    assert!(relative_error(b.estimate(), 500) < 0.01);
}

#[test]
fn test_round_trip() {
    let sketch = sketch_of(14, (0..100).map(|i| format!("user-{i}")));
    let data = sketch.marshal_binary();
    let restored = Sketch::try_from(data.as_slice()).unwrap();
    assert_eq!(restored.estimate(), 100);
    assert_eq!(restored, sketch);
}

#[test]
fn test_scale() {
    let n = 10_000_000;
    let mut sketch = Sketch::new(14).unwrap();
    let mut item = String::new();
    for i in 0..n {
        item.clear();
        write!(item, "item-{i}").unwrap();
        sketch.insert(item.as_bytes());
    }
    assert!(!sketch.is_sparse());
    assert!(
        relative_error(sketch.estimate(), n) < 0.02,
        "estimate {}",
        sketch.estimate()
    );
}

#[test]
fn test_shards_match_single_sketch() {
    let n = 100_000;
    let shards = 8;
    let single = sketch_of(14, (0..n).map(|i| format!("event-{i}")));

    let mut merged = Sketch::new(14).unwrap();
    for shard in 0..shards {
        let part = sketch_of(
            14,
            (0..n)
                .filter(|i| i % shards == shard)
                .map(|i| format!("event-{i}")),
        );
        assert!(part.is_sparse());
        merged.merge(&part).unwrap();
    }
    assert!(!merged.is_sparse());
    assert_eq!(merged, single);
    assert_eq!(merged.estimate(), single.estimate());
}

#[test_case(&[0, 1, 2]; "forward")]
#[test_case(&[2, 1, 0]; "backward")]
#[test_case(&[1, 2, 0]; "rotated")]
fn test_merge_order(order: &[usize]) {
    let sketches = [
        sketch_of(12, (0..300).map(|i| format!("a-{i}"))),
        sketch_of(12, (0..20_000).map(|i| format!("b-{i}"))),
        sketch_of(12, (0..3_000).map(|i| format!("c-{i}"))),
    ];
    let mut expected = sketches[0].clone();
    expected.merge(&sketches[1]).unwrap();
    expected.merge(&sketches[2]).unwrap();

    let mut merged = sketches[order[0]].clone();
    for &i in &order[1..] {
        merged.merge(&sketches[i]).unwrap();
    }
    assert_eq!(merged.estimate(), expected.estimate());
    assert!(relative_error(merged.estimate(), 23_300) < 0.05);
}

#[test]
fn test_merge_precision_mismatch() {
    let mut a = Sketch::new(12).unwrap();
    let b = Sketch::new(13).unwrap();
    assert_eq!(
        a.merge(&b),
        Err(SketchError::PrecisionMismatch {
            expected: 12,
            actual: 13
        })
    );
}

#[test_case(4)]
#[test_case(8)]
#[test_case(12)]
#[test_case(16)]
fn test_estimators_agree(precision: u8) {
    let n = 20usize << precision;
    let mut bias_corrected = Sketch::new(precision).unwrap();
    let config = SketchConfig::default()
        .with_precision(precision)
        .with_estimator(LogLogBeta);
    let mut loglog_beta = Sketch::with_config(config).unwrap();
    for i in 0..n {
        bias_corrected.insert_item(&i);
        loglog_beta.insert_item(&i);
    }
    // same registers, only the estimate formula differs
    assert_eq!(bias_corrected, loglog_beta);
    let bound = 0.05f64.max(6.0 * 1.04 / f64::from(1u32 << precision).sqrt());
    assert!(relative_error(bias_corrected.estimate(), n) < bound);
    assert!(relative_error(loglog_beta.estimate(), n) < bound);
}

#[test_case(14, 100; "sparse")]
#[test_case(10, 50_000; "dense")]
fn test_truncated_input(precision: u8, n: usize) {
    let data = sketch_of(precision, (0..n).map(|i| format!("key-{i}"))).marshal_binary();
    for len in 0..data.len() {
        assert_eq!(
            Sketch::from_binary(&data[..len]),
            Err(SketchError::TruncatedInput),
            "prefix length {len}"
        );
    }
}

#[test]
fn test_version_1_migration() {
    let sketch = sketch_of(10, (0..50_000).map(|i| format!("key-{i}")));
    assert!(!sketch.is_sparse());
    let data = sketch.marshal_binary();

    // legacy layout packs two registers per byte
    let registers = &data[8..];
    let mut legacy = vec![1, data[1], data[2], data[3]];
    legacy.extend_from_slice(&(registers.len() as u32 / 2).to_be_bytes());
    legacy.extend(registers.chunks_exact(2).map(|pair| (pair[0] << 4) | pair[1]));

    let migrated = Sketch::from_binary(&legacy).unwrap();
    assert_eq!(migrated, sketch);
    assert_eq!(migrated.estimate(), sketch.estimate());
    assert_eq!(migrated.marshal_binary(), data);
}
