pub mod fields;
pub mod key;
pub mod parser;
pub mod pipeline;
