pub mod config;
pub mod info;
pub mod layout;
pub mod probe;
