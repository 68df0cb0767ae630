//! Decoding pipeline: scanner → (strict validation) → frame-stack parser

pub mod parser;
pub mod scanner;
pub mod validation;
