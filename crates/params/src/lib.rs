//! Constant values for ucrypt cryptographic operations
//!
//! This library provides the numeric parameters shared by the block engine,
//! the chaining modes and the cipher factory.

#![no_std]

pub mod utils;
