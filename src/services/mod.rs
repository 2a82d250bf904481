pub mod loader;
pub mod report;

// Re-export commonly used services
pub use loader::{load_document, parse_document};
pub use report::Reporter;
