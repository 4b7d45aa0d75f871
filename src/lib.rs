#![allow(clippy::result_large_err)]

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod doctor;
pub mod error;
pub mod generate;
pub mod git;
pub mod pipeline;
pub mod provider;
