//! Staged website audit: a fast PageSpeed pass reported immediately, then
//! AI-enriched recommendations, plus lead capture for follow-up.
#![allow(missing_docs)]

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
