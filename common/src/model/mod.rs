pub mod field;
pub mod form_state;
