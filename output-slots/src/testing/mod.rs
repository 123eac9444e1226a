//! Testing utilities for host types with declared outputs.

mod assertions;

pub use assertions::{
    assert_output_not_set_error, assert_output_set, assert_output_unset, assert_output_value,
    assert_outputs_valid,
};
