// Spinner widget components

pub mod spinner;

pub use spinner::PaperclipSpinner;
