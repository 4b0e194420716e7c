//! Sequential multi-sample recording.

use tracing::debug;

use crate::config::ClientConfig;
use crate::error::MeaError;
use crate::session;
use crate::transport::Connector;
use meaproto::{LiveData, MeaId};

/// Record `n` samples back to back, one session each.
///
/// Sessions are serialized: each asserts exclusive use of one live
/// connection, and interleaving would make the service's device-selection
/// state ambiguous. Sample `i` fully completes, teardown included, before
/// session `i + 1` begins. The first failure aborts the run and discards
/// anything collected so far.
pub(crate) async fn record_n<C: Connector>(
    connector: &C,
    config: &ClientConfig,
    id: MeaId,
    n: usize,
) -> Result<Vec<LiveData>, MeaError> {
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        let sample = session::open_session(connector, config, id).await?;
        debug!("{}: recorded sample {}/{} from MEA {}", config.name, i + 1, n, id);
        samples.push(sample);
    }
    Ok(samples)
}
