//! Session lifecycle tests against a scripted transport.

mod common;

use std::sync::atomic::Ordering;
use std::time::Duration;

use bytes::Bytes;
use pretty_assertions::assert_eq;

use common::{identity_frame_bytes, live_data, test_config, MockConnector, Script};
use mealive::{LiveMea, MeaError};
use meaproto::{EventFrame, ELECTRODES_PER_DEVICE, SAMPLES_PER_ELECTRODE};

#[tokio::test]
async fn records_one_sample_and_disconnects() {
    let connector =
        MockConnector::new(vec![Script::Serve(vec![live_data(identity_frame_bytes())])]);
    let stats = connector.stats.clone();
    let client = LiveMea::with_connector(test_config(), connector);

    let sample = client.record_sample(2).await.unwrap();

    assert_eq!(sample.data.len(), ELECTRODES_PER_DEVICE);
    for row in &sample.data {
        assert_eq!(row.len(), SAMPLES_PER_ELECTRODE);
    }
    // Device 2 starts at flat index 1 * 32 * 4096 = 65536.
    assert_eq!(sample.data[0][0], 65536.0);
    assert_eq!(sample.data[0][SAMPLES_PER_ELECTRODE - 1], 69631.0);

    assert_eq!(stats.connects.load(Ordering::SeqCst), 1);
    assert_eq!(stats.disconnects.load(Ordering::SeqCst), 1);
    // The wire carries the zero-based index.
    assert_eq!(*stats.selections.lock().unwrap(), vec![1]);
}

#[tokio::test]
async fn invalid_id_performs_no_network_activity() {
    for bad in [0u8, 5, 255] {
        let connector = MockConnector::new(vec![]);
        let stats = connector.stats.clone();
        let client = LiveMea::with_connector(test_config(), connector);

        let err = client.record_sample(bad).await.unwrap_err();
        assert!(matches!(err, MeaError::InvalidMeaId(_)), "id {bad}: {err:?}");
        assert_eq!(stats.connects.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn connection_failure_surfaces_with_diagnostic() {
    let connector = MockConnector::new(vec![Script::Refuse("connection refused by peer")]);
    let stats = connector.stats.clone();
    let client = LiveMea::with_connector(test_config(), connector);

    match client.record_sample(1).await.unwrap_err() {
        MeaError::Connection(msg) => assert!(msg.contains("refused"), "got {msg:?}"),
        other => panic!("expected connection error, got {other:?}"),
    }
    // The connection never opened, so there is nothing to tear down.
    assert_eq!(stats.disconnects.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn short_frame_is_malformed_and_still_disconnects() {
    let mut raw = Vec::new();
    for i in 0..500_000u32 {
        raw.extend_from_slice(&(i as f32).to_le_bytes());
    }
    let connector = MockConnector::new(vec![Script::Serve(vec![live_data(Bytes::from(raw))])]);
    let stats = connector.stats.clone();
    let client = LiveMea::with_connector(test_config(), connector);

    let err = client.record_sample(1).await.unwrap_err();
    assert!(matches!(err, MeaError::MalformedFrame(_)), "got {err:?}");
    assert_eq!(stats.disconnects.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unrelated_events_are_skipped() {
    let connector = MockConnector::new(vec![Script::Serve(vec![
        EventFrame::new("status", Bytes::from_static(b"ok")),
        live_data(identity_frame_bytes()),
    ])]);
    let client = LiveMea::with_connector(test_config(), connector);

    let sample = client.record_sample(1).await.unwrap();
    assert_eq!(sample.data[0][0], 0.0);
}

#[tokio::test]
async fn frame_timeout_is_a_connection_error() {
    let connector = MockConnector::new(vec![Script::Silent]);
    let stats = connector.stats.clone();
    let config = test_config().with_frame_timeout(Duration::from_millis(50));
    let client = LiveMea::with_connector(config, connector);

    let err = client.record_sample(1).await.unwrap_err();
    assert!(matches!(err, MeaError::Connection(_)), "got {err:?}");
    assert_eq!(stats.disconnects.load(Ordering::SeqCst), 1);
}
