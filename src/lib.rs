#![allow(clippy::needless_return)]
//! Translate component demos into submissions for an online code playground.

pub mod app;
pub mod config;
mod debug_print;
pub mod demo;
pub mod translate;

pub use config::PlaygroundConfig;
pub use demo::{Demo, Template, TranslationResult};
pub use translate::{translate, translate_with, TranslateError};
