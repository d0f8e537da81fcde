pub mod settings;
pub mod singlish;
pub mod unicode;
