//! The form currently open, if any

use super::session::{FormSession, FormSessionOps};
use medibook::forms::{Appointment, ProfileEdit, SignUp};

/// Enum representing all possible form states
#[derive(Debug, Default)]
pub enum FormState {
    #[default]
    None,
    SignUp(FormSession<SignUp>),
    Profile(FormSession<ProfileEdit>),
    Appointment(FormSession<Appointment>),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::None)
    }

    pub fn session(&self) -> Option<&dyn FormSessionOps> {
        match self {
            FormState::None => None,
            FormState::SignUp(f) => Some(f),
            FormState::Profile(f) => Some(f),
            FormState::Appointment(f) => Some(f),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut dyn FormSessionOps> {
        match self {
            FormState::None => None,
            FormState::SignUp(f) => Some(f),
            FormState::Profile(f) => Some(f),
            FormState::Appointment(f) => Some(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::session::Form;
    use medibook::form::ValueMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_has_no_session() {
        let mut state = FormState::default();
        assert!(!state.is_open());
        assert!(state.session().is_none());
        assert!(state.session_mut().is_none());
    }

    #[test]
    fn test_session_dispatch() {
        let mut state = FormState::Appointment(FormSession::new(ValueMap::new()).unwrap());
        assert!(state.is_open());
        let session = state.session_mut().unwrap();
        session.next_field();
        assert_eq!(session.active_field(), 1);
        assert_eq!(state.session().unwrap().view().title, "Book an appointment");
    }
}
