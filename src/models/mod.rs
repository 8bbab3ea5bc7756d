pub mod codes;
pub mod days;
pub mod entry;
pub mod validation;
pub mod week_key;
