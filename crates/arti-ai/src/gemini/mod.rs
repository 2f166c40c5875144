//! Google Gemini API client.
//!
//! Implements `AiClient` for Gemini models via the Generative Language
//! API, and `ChatProvider` on top of it.

mod api;
mod client;
mod config;


pub use client::{GeminiClient, GEMINI_API_BASE};
pub use config::GeminiConfig;
