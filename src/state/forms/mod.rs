//! Form domain layer
//!
//! Wraps the library's multi-step forms with the focus and editing state
//! the terminal front-end needs.

mod form_state;
mod session;

pub use form_state::FormState;
pub use session::{FieldView, Form, FormSession, FormSessionOps, FormView, SubmitResult};
