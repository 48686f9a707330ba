//! Demonstration client for the BeerLikes gRPC service.
//!
//! Opens a single plaintext channel to a configurable host:port, issues
//! the demonstration RPCs (`GetLike`, `ListLikes`, `GetLikesSummary`)
//! sequentially, and logs the responses. The library surface exists so the
//! integration tests can drive the same code paths as the binary.

pub mod cli;
pub mod client;
pub mod instrumentation;
pub mod proto;
pub mod runtime;
