//! AI module for Genify
//!
//! Talks to an OpenAI-compatible endpoint: one model listing call and one
//! streaming chat completion call.
//!
//! # Architecture
//!
//! - `client` - `GenifyClient` and the `ChatBackend` trait it implements
//! - `sse` - event-stream decoding into content fragments
//!
//! # Usage
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use genify::ai::{ChatBackend, GenifyClient};
//! use genify::types::ChatMessage;
//!
//! # async fn example() -> Result<(), genify::ai::ClientError> {
//! let client = GenifyClient::from_env();
//! let models = client.list_models().await;
//! let mut stream = client
//!     .stream_completion(&models[0].id, &[ChatMessage::user("A todo app")])
//!     .await?;
//! while let Some(piece) = stream.next().await {
//!     print!("{}", piece?);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod sse;

// Re-export main types
pub use client::{
    ChatBackend, ClientError, ClientResult, FragmentStream, GenifyClient, NON_CHAT_MARKERS,
    filter_chat_models,
};
