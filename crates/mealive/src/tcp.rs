//! TCP transport speaking the meaproto event codec.

use anyhow::{Context, Result};
use async_trait::async_trait;
use bytes::Bytes;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::config::ClientConfig;
use crate::transport::{Connector, Transport};
use meaproto::{EventFrame, FrameError, MAX_BODY_BYTES};

/// Opens one TCP connection per session.
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    type Transport = TcpTransport;

    async fn connect(&self, config: &ClientConfig) -> Result<TcpTransport> {
        let stream = tokio::time::timeout(
            config.connect_timeout,
            TcpStream::connect(&config.endpoint),
        )
        .await
        .with_context(|| {
            format!(
                "{}: connect to {} timed out after {:?}",
                config.name, config.endpoint, config.connect_timeout
            )
        })?
        .with_context(|| format!("{}: failed to connect to {}", config.name, config.endpoint))?;

        debug!("{}: connected to {}", config.name, config.endpoint);
        Ok(TcpTransport {
            stream,
            name: config.name.clone(),
        })
    }
}

/// Event channel over a single TCP stream.
pub struct TcpTransport {
    stream: TcpStream,
    name: String,
}

#[async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, event: EventFrame) -> Result<()> {
        debug!(
            "{}: sending {:?} ({} byte body)",
            self.name,
            event.name,
            event.body.len()
        );
        self.stream
            .write_all(&event.to_bytes())
            .await
            .with_context(|| format!("{}: failed to send {:?}", self.name, event.name))?;
        self.stream
            .flush()
            .await
            .with_context(|| format!("{}: failed to flush {:?}", self.name, event.name))?;
        Ok(())
    }

    async fn next_event(&mut self) -> Result<EventFrame> {
        // Reads mirror the EventFrame layout: name length, name, body
        // length, body.
        let mut len2 = [0u8; 2];
        self.stream.read_exact(&mut len2).await?;
        let name_len = u16::from_be_bytes(len2) as usize;

        let mut name = vec![0u8; name_len];
        self.stream.read_exact(&mut name).await?;
        let name = String::from_utf8(name).map_err(|_| FrameError::InvalidUtf8)?;

        let mut len4 = [0u8; 4];
        self.stream.read_exact(&mut len4).await?;
        let body_len = u32::from_be_bytes(len4) as usize;
        if body_len > MAX_BODY_BYTES {
            return Err(FrameError::BodyTooLarge {
                actual: body_len,
                max: MAX_BODY_BYTES,
            }
            .into());
        }

        let mut body = vec![0u8; body_len];
        self.stream.read_exact(&mut body).await?;

        debug!("{}: received {:?} ({} byte body)", self.name, name, body_len);
        Ok(EventFrame::new(name, Bytes::from(body)))
    }

    async fn disconnect(&mut self) {
        if let Err(e) = self.stream.shutdown().await {
            debug!("{}: error during shutdown: {}", self.name, e);
        }
        debug!("{}: disconnected", self.name);
    }
}
