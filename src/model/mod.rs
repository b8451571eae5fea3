//! Pretrained model integration

pub mod tokenizer_model;
