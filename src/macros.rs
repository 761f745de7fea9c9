/// Builds a [`Value`](crate::Value) tree from a JSON-like literal.
///
/// # Examples
///
/// ```rust
/// use json_doc::{json, Value};
///
/// let data = json!({
///     "name": "Alice",
///     "scores": [95, 87, 92],
///     "active": true,
///     "manager": null
/// });
/// assert!(data.is_map());
/// ```
#[macro_export]
macro_rules! json {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::json!($elem)),*])
    };

    // Handle empty object
    ({}) => {
        $crate::Value::Object($crate::JsonMap::new())
    };

    // Handle non-empty object
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::JsonMap::new();
        $(
            object.insert($key.to_string(), $crate::json!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Fallback: anything with a From<_> for Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
