use cardinality_sketch::Sketch;

fn main() {
    let mut sketch1 = Sketch::new(14).unwrap();
    for i in 0..500 {
        sketch1.insert(format!("item-{i}").as_bytes());
    }
    println!("sketch1 estimate = {}", sketch1.estimate());

    let mut sketch2 = Sketch::new(14).unwrap();
    for i in 250..750 {
        sketch2.insert(format!("item-{i}").as_bytes());
    }
    println!("sketch2 estimate = {}", sketch2.estimate());

    sketch1.merge(&sketch2).unwrap();
    println!("merged estimate = {}", sketch1.estimate());

    let data = sketch1.marshal_binary();
    let restored = Sketch::from_binary(&data).unwrap();
    println!("restored estimate = {} ({} bytes)", restored.estimate(), data.len());
}
