pub mod leave_application_form;
