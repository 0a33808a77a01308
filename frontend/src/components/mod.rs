pub mod date_picker;
pub mod forms;
