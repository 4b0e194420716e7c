//! Transport seam.
//!
//! The service channel is treated as a black box offering connect, named
//! event send/receive, and disconnect. [`TcpTransport`](crate::TcpTransport)
//! is the production implementation; tests plug in doubles through the same
//! traits.

use async_trait::async_trait;

use crate::config::ClientConfig;
use meaproto::EventFrame;

/// One live event channel to the service.
///
/// Errors from `send` and `next_event` are the transport's failure signal;
/// the session layer maps them to connection errors.
#[async_trait]
pub trait Transport: Send {
    /// Emit a named event to the service.
    async fn send(&mut self, event: EventFrame) -> anyhow::Result<()>;

    /// Receive the next named event from the service.
    async fn next_event(&mut self) -> anyhow::Result<EventFrame>;

    /// Close the channel. Best effort - teardown never produces an error
    /// of its own, so every session exit path can call it unconditionally.
    async fn disconnect(&mut self);
}

/// Opens a fresh [`Transport`] per call.
///
/// Sessions are never pooled: each recording gets its own connection and
/// closes it before the next one starts.
#[async_trait]
pub trait Connector: Send + Sync {
    type Transport: Transport;

    async fn connect(&self, config: &ClientConfig) -> anyhow::Result<Self::Transport>;
}
