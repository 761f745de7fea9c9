//! Building trees programmatically with the `json!` macro and the `Value`
//! constructors, then wrapping them into an immutable `Document`.
//!
//! Run with: `cargo run --example dynamic`

use json_doc::{json, to_string, Document, JsonMap, Value};

fn main() {
    // A response assembled the way a stat-request handler would build it
    let mut result = JsonMap::new();
    result.insert("request_id".to_string(), Value::from(1));
    result.insert("curvature".to_string(), Value::from(1.30853));
    result.insert("route_length".to_string(), Value::from(27400));
    result.insert("stop_count".to_string(), Value::from(6));

    let responses = Document::new(Value::Array(vec![Value::Object(result)]));
    println!("assembled:\n{}", to_string(&responses));

    // The same tree, written as a literal
    let literal = json!([{
        "request_id": 1,
        "curvature": 1.30853,
        "route_length": 27400,
        "stop_count": 6
    }]);
    assert_eq!(literal, responses.into_root());

    // Tag inspection: ints are double-like, doubles are not ints
    let value = json!(42);
    println!("42 is_int={} is_double={} is_pure_double={}",
        value.is_int(), value.is_double(), value.is_pure_double());
}
