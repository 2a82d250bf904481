pub mod text;

pub use text::{char_len, truncate_sample};
