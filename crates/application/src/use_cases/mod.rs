//! Use case orchestration

mod update_variable;

pub use update_variable::{UpdateVariable, UpdateVariableError};
