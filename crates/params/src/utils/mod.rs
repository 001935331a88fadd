//! Parameter groups

pub mod symmetric;
