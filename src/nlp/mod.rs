//! Text processing utilities

pub mod tokenizer;
