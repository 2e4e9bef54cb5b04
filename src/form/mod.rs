//! Form engine
//!
//! This module provides the pieces every form in the app is built from:
//! - `field`: field keys, values and error codes
//! - `controller`: value/error bookkeeping and submit handling
//! - `stepper`: clamped step navigation
//! - `wizard`: multi-step forms combining the two

mod controller;
mod field;
mod stepper;
mod wizard;

pub use controller::FormStateController;
pub use field::{
    invalid_labels, ErrorCode, ErrorKind, ErrorMap, FieldKey, FieldKind, FieldValue, ValueMap,
};
pub use stepper::{Stepper, StepperError};
pub use wizard::{FormStep, MultiStepForm, StepMeta, StepOutcome};
