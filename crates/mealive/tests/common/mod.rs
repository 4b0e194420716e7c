//! Scripted transport double shared by the client tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;

use mealive::{ClientConfig, Connector, Transport};
use meaproto::{EventFrame, EVENT_LIVE_DATA, EVENT_MEA_SELECT, TOTAL_SAMPLES};

/// What the fake service does with one connection attempt.
pub enum Script {
    /// Accept, then deliver these events in order.
    Serve(Vec<EventFrame>),
    /// Fail the connection attempt with this diagnostic.
    Refuse(&'static str),
    /// Accept but never deliver anything.
    Silent,
}

/// Counters observed by assertions after a run.
#[derive(Default)]
pub struct MockStats {
    pub connects: AtomicUsize,
    pub disconnects: AtomicUsize,
    /// Wire-form (zero-based) device indices seen in select events.
    pub selections: Mutex<Vec<u8>>,
}

pub struct MockConnector {
    scripts: Mutex<VecDeque<Script>>,
    pub stats: Arc<MockStats>,
}

impl MockConnector {
    pub fn new(scripts: Vec<Script>) -> Self {
        Self {
            scripts: Mutex::new(scripts.into()),
            stats: Arc::new(MockStats::default()),
        }
    }
}

#[async_trait]
impl Connector for MockConnector {
    type Transport = MockTransport;

    async fn connect(&self, _config: &ClientConfig) -> Result<MockTransport> {
        self.stats.connects.fetch_add(1, Ordering::SeqCst);
        let script = self
            .scripts
            .lock()
            .unwrap()
            .pop_front()
            .expect("test opened more connections than scripted");
        let queue = match script {
            Script::Refuse(msg) => return Err(anyhow!(msg)),
            Script::Serve(events) => events.into(),
            Script::Silent => VecDeque::new(),
        };
        Ok(MockTransport {
            queue,
            stats: self.stats.clone(),
        })
    }
}

pub struct MockTransport {
    queue: VecDeque<EventFrame>,
    stats: Arc<MockStats>,
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&mut self, event: EventFrame) -> Result<()> {
        if event.name == EVENT_MEA_SELECT {
            self.stats.selections.lock().unwrap().push(event.body[0]);
        }
        Ok(())
    }

    async fn next_event(&mut self) -> Result<EventFrame> {
        match self.queue.pop_front() {
            Some(event) => Ok(event),
            // Out of scripted events: stay quiet until the session times out.
            None => std::future::pending().await,
        }
    }

    async fn disconnect(&mut self) {
        self.stats.disconnects.fetch_add(1, Ordering::SeqCst);
    }
}

/// Frame body with value `i` at flat index `i`.
pub fn identity_frame_bytes() -> Bytes {
    let mut raw = Vec::with_capacity(TOTAL_SAMPLES * 4);
    for i in 0..TOTAL_SAMPLES {
        raw.extend_from_slice(&(i as f32).to_le_bytes());
    }
    Bytes::from(raw)
}

/// Frame body with every sample set to `value`.
pub fn constant_frame_bytes(value: f32) -> Bytes {
    let mut raw = Vec::with_capacity(TOTAL_SAMPLES * 4);
    for _ in 0..TOTAL_SAMPLES {
        raw.extend_from_slice(&value.to_le_bytes());
    }
    Bytes::from(raw)
}

pub fn live_data(body: Bytes) -> EventFrame {
    EventFrame::new(EVENT_LIVE_DATA, body)
}

/// Config with a short frame timeout so silent-transport tests finish fast.
pub fn test_config() -> ClientConfig {
    ClientConfig::new("mock:0").with_frame_timeout(Duration::from_millis(200))
}
