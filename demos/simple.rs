//! Your first json-doc experience: parse a document, read it through the
//! typed accessors, and serialize it back.
//!
//! Run with: `cargo run --example simple`

use json_doc::{from_str, to_string};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"
    {
        "name": "Electrichka",
        "stops": ["Sokolniki", "Krasnoselskaya", "Baumanskaya"],
        "is_roundtrip": false,
        "route_length": 12400,
        "curvature": 1.2318
    }
    "#;

    let doc = from_str(input)?;
    let route = doc.root().as_map()?;

    println!("name:      {}", route.get("name").unwrap().as_str()?);
    println!("roundtrip: {}", route.get("is_roundtrip").unwrap().as_bool()?);
    println!("length:    {}", route.get("route_length").unwrap().as_int()?);
    println!("curvature: {}", route.get("curvature").unwrap().as_double()?);

    for stop in route.get("stops").unwrap().as_array()? {
        println!("stop:      {}", stop.as_str()?);
    }

    // Objects come back line-broken and key-sorted; arrays stay compact
    println!("\nserialized:\n{}", to_string(&doc));
    Ok(())
}
