//! One recording session: connect, select a device, await one frame.
//!
//! A session owns its transport exclusively from connect to teardown.
//! Receipt is a single awaited receive keyed to the `livedata` event,
//! bounded by the configured frame timeout: exactly one frame is expected
//! per session, and a silent service cannot hang the caller forever.

use chrono::Utc;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::MeaError;
use crate::transport::{Connector, Transport};
use meaproto::{decode_live_frame, EventFrame, LiveData, MeaId, EVENT_LIVE_DATA};

/// Run one full session and return the decoded, timestamped sample.
///
/// The transport is disconnected on every exit path - success, connection
/// failure, or decode failure - before the result is returned.
pub(crate) async fn open_session<C: Connector>(
    connector: &C,
    config: &ClientConfig,
    id: MeaId,
) -> Result<LiveData, MeaError> {
    let mut transport = connector
        .connect(config)
        .await
        .map_err(MeaError::connection)?;

    let result = run(&mut transport, config, id).await;
    transport.disconnect().await;
    result
}

async fn run<T: Transport>(
    transport: &mut T,
    config: &ClientConfig,
    id: MeaId,
) -> Result<LiveData, MeaError> {
    transport
        .send(EventFrame::select_device(id))
        .await
        .map_err(MeaError::connection)?;

    let frame = await_live_data(transport, config).await?;
    let data = decode_live_frame(&frame.body, id)?;
    debug!(
        "{}: decoded {} electrodes for MEA {}",
        config.name,
        data.len(),
        id
    );

    // Time of receipt, stamped once the frame is fully decoded.
    Ok(LiveData {
        timestamp: Utc::now(),
        data,
    })
}

/// Wait for exactly one `livedata` event, skipping anything else.
async fn await_live_data<T: Transport>(
    transport: &mut T,
    config: &ClientConfig,
) -> Result<EventFrame, MeaError> {
    let deadline = tokio::time::Instant::now() + config.frame_timeout;
    loop {
        let event = tokio::time::timeout_at(deadline, transport.next_event())
            .await
            .map_err(|_| {
                MeaError::Connection(format!(
                    "{}: no live data within {:?}",
                    config.name, config.frame_timeout
                ))
            })?
            .map_err(MeaError::connection)?;

        if event.name == EVENT_LIVE_DATA {
            return Ok(event);
        }
        debug!(
            "{}: ignoring {:?} while waiting for live data",
            config.name, event.name
        );
    }
}
