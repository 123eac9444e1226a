//! Test assertions for output stores.

use crate::store::OutputStore;
use serde_json::Value;

/// Asserts that a declared output has been written.
pub fn assert_output_set(store: &OutputStore, name: &str) {
    match store.is_set(name) {
        Ok(set) => assert!(
            set,
            "Expected output '{}' to be set. Written: {:?}",
            name,
            store.names().collect::<Vec<_>>()
        ),
        Err(err) => panic!("{err}"),
    }
}

/// Asserts that a declared output has not been written.
pub fn assert_output_unset(store: &OutputStore, name: &str) {
    match store.get_output(name) {
        Ok(value) => assert!(
            value.is_none(),
            "Expected output '{}' to be unset, got {:?}",
            name,
            value
        ),
        Err(err) => panic!("{err}"),
    }
}

/// Asserts that an output holds the expected value.
pub fn assert_output_value(store: &OutputStore, name: &str, expected: &Value) {
    let actual = store.get_output(name);
    assert_eq!(
        actual,
        Ok(Some(expected)),
        "Expected value {:?} for output '{}', got {:?}",
        expected,
        name,
        actual
    );
}

/// Asserts that every required output has been written.
pub fn assert_outputs_valid(store: &OutputStore) {
    let missing = store.missing_required_outputs();
    assert!(
        missing.is_empty(),
        "Expected all required outputs to be set, missing: {:?}",
        missing
    );
}

/// Asserts that validation fails on exactly `name`.
pub fn assert_output_not_set_error(store: &OutputStore, name: &str) {
    match store.validate_outputs() {
        Ok(()) => panic!("Expected output '{name}' to be reported as not set, but validation passed"),
        Err(err) => assert_eq!(
            err.name, name,
            "Expected output '{}' to be reported as not set, got '{}'",
            name, err.name
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OutputOptions;
    use crate::registry::OutputRegistry;
    use serde_json::json;

    fn store() -> OutputStore {
        OutputStore::new(
            OutputRegistry::new()
                .with_outputs(["a"], OutputOptions::new().required(true))
                .with_outputs(["b"], OutputOptions::new())
                .into_shared(),
        )
    }

    #[test]
    fn test_assertions_pass() {
        let mut store = store();
        assert_output_unset(&store, "a");
        assert_output_not_set_error(&store, "a");

        store.output("a", 1).unwrap();
        assert_output_set(&store, "a");
        assert_output_value(&store, "a", &json!(1));
        assert_outputs_valid(&store);
    }

    #[test]
    #[should_panic(expected = "Unknown output 'z'")]
    fn test_assert_output_set_on_unknown() {
        assert_output_set(&store(), "z");
    }

    #[test]
    #[should_panic(expected = "missing")]
    fn test_assert_outputs_valid_fails() {
        assert_outputs_valid(&store());
    }

    #[test]
    #[should_panic(expected = "validation passed")]
    fn test_assert_not_set_error_when_valid() {
        let mut store = store();
        store.output("a", 1).unwrap();
        assert_output_not_set_error(&store, "a");
    }
}
