use crate::Error;
use near_jsonrpc_client::{methods, JsonRpcClient};
use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

const WINDOW: usize = 5;

/// Periodic "height / speed / ETA" line while streaming.
pub(crate) struct Progress {
    interval: Duration,
    time: Instant,
    eta: VecDeque<(Duration, u64)>,
    records: u64,
}

impl Progress {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            time: Instant::now(),
            eta: VecDeque::new(),
            records: 0,
        }
    }

    pub(crate) async fn observe(&mut self, block_height: u64, stored: usize, client: &JsonRpcClient) {
        self.records += stored as u64;
        let elapsed = self.time.elapsed();
        if elapsed <= self.interval {
            return;
        }
        self.time = Instant::now();
        self.eta.push_back((elapsed, block_height));
        if self.eta.len() > WINDOW {
            self.eta.pop_front();
        }
        let blocks_per_millis = match blocks_per_millis(&self.eta) {
            Some(rate) => rate,
            None => return,
        };

        match get_current_block_height(client).await {
            Ok(current_block_height) => {
                let remaining = current_block_height.saturating_sub(block_height);
                let eta = Duration::from_millis((remaining as f64 / blocks_per_millis) as u64);
                log::info!(
                    "Height: {}, BPS: {:.1}, Records: {}, ETA: {}",
                    block_height,
                    blocks_per_millis * 1_000.,
                    self.records,
                    humantime::Duration::from(eta)
                );
            }
            Err(err) => log::warn!("Failed to fetch chain head: {}", err),
        }
    }
}

fn blocks_per_millis(eta: &VecDeque<(Duration, u64)>) -> Option<f64> {
    if eta.len() < 2 {
        return None;
    }
    let (_, first_block_height) = eta.front()?;
    let (_, last_block_height) = eta.back()?;
    // The first sample's duration predates its height, so it is left out.
    let total_dur: Duration = eta.iter().skip(1).map(|(t, _)| t).sum();
    let total_blocks = last_block_height.saturating_sub(*first_block_height);
    if total_blocks == 0 || total_dur.is_zero() {
        return None;
    }
    Some(total_blocks as f64 / total_dur.as_millis().max(1) as f64)
}

async fn get_current_block_height(client: &JsonRpcClient) -> Result<u64, Error> {
    let status = client.call(methods::status::RpcStatusRequest).await?;

    Ok(status.sync_info.latest_block_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_two_samples() {
        let mut eta = VecDeque::new();
        eta.push_back((Duration::from_secs(10), 100));
        assert_eq!(blocks_per_millis(&eta), None);
    }

    #[test]
    fn rate_over_window() {
        let eta: VecDeque<_> = [
            (Duration::from_secs(10), 100),
            (Duration::from_secs(10), 200),
            (Duration::from_secs(10), 300),
        ]
        .into_iter()
        .collect();
        let rate = blocks_per_millis(&eta).unwrap();
        assert!((rate * 1_000. - 10.).abs() < f64::EPSILON * 1_000.);
    }

    #[test]
    fn stalled_stream_has_no_rate() {
        let eta: VecDeque<_> = [(Duration::from_secs(10), 100), (Duration::from_secs(10), 100)]
            .into_iter()
            .collect();
        assert_eq!(blocks_per_millis(&eta), None);
    }
}
