//! Text processing and skill matching module

pub mod vocabulary;
pub mod tokenizer;
pub mod skill_matcher;
pub mod extractor;
