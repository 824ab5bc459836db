// Utility modules
pub mod logger;
pub mod process_names;
