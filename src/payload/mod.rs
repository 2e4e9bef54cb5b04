//! Serialization boundary
//!
//! Turns a validated value map into mutation variables and hands the result
//! to a [`PayloadSink`].

mod case;
mod sink;
mod variables;

pub use case::{camel_to_snake, snake_to_camel};
pub use sink::{JsonOutbox, MutationPayload, PayloadSink};
pub use variables::{build_variables, values_from_record, EmptyFieldPolicy};

#[cfg(test)]
pub use sink::MockPayloadSink;
