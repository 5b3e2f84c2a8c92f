pub mod dashboard;
pub mod inspection;
pub mod inspection_form;
