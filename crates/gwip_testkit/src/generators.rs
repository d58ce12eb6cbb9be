//! Property-based test generators using proptest.

use proptest::prelude::*;

/// Strategy for a single field value.
///
/// Includes commas and spaces so delimited-text round trips exercise
/// quoting, but no line terminators.
pub fn field_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z0-9,. _-]{0,12}").expect("invalid regex")
}

/// Strategy for a row of `width` field values.
pub fn row_strategy(width: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(field_strategy(), width)
}

/// Strategy for up to 50 rows of `width` field values.
pub fn lines_strategy(width: usize) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(row_strategy(width), 0..50)
}

/// Strategy for a column name.
///
/// Never produces the reserved `seek` name.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,8}")
        .expect("invalid regex")
        .prop_filter("name must not be reserved", |s| s != "seek")
}
