//! Domain services used by page and API routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own content loading, rendering helpers, and the worker
//! client so route handlers stay focused on HTTP translation.

pub mod content;
pub mod entries;
pub mod markdown;
pub mod reactions;
pub mod worker;
