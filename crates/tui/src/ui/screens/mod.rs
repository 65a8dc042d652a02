pub mod breakdown;
pub mod entry_form;
pub mod login;
pub mod overview;
pub mod table;
