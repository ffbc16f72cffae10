//! HTTP client for the remote assist endpoint.
//!
//! One blocking POST per question, JSON in and out. The heavy lifting
//! (outline building, text export) lives in `study-core`; this crate only
//! moves answer documents over the wire.

pub mod client;
pub mod request;

pub use client::{resolve_base_url, AssistClient, DEFAULT_BASE_URL, ENV_BACKEND_URL};
pub use request::AssistRequest;
