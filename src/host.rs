//! Host gauge sampling: CPU percent, memory, and network throughput derived
//! from cumulative interface counters between consecutive cycles.

use chrono::{DateTime, Local};
use sysinfo::{Networks, System};

/// Point-in-time snapshot of the host's cumulative network counters. Exactly
/// one previous sample is retained across render cycles, owned by the
/// [`HostMonitor`]; there is no other cross-cycle state.
#[derive(Debug, Clone, Copy)]
pub struct HostSample {
    pub taken_at: DateTime<Local>,
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

/// Host gauge readings for one rendered frame.
#[derive(Debug, Clone, Copy)]
pub struct HostGauges {
    pub cpu_percent: f32,
    pub memory_percent: f64,
    pub memory_used_bytes: u64,
    pub memory_total_bytes: u64,
    pub send_rate_bytes_per_sec: f64,
    pub recv_rate_bytes_per_sec: f64,
}

/// `(current − previous) / elapsed` for one cumulative counter pair. A
/// counter that moved backwards (wrap, interface removal) yields a negative
/// rate, which the byte renderer passes through unclamped.
pub fn counter_rate(previous: u64, current: u64, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 {
        return 0.0;
    }
    (current as f64 - previous as f64) / elapsed_secs
}

/// Samples OS gauges and counters via sysinfo.
///
/// The first frame's throughput is derived against zero counters and the
/// monitor's construction time, so it reads as "bytes since boot over time
/// since startup" and settles from the second frame on.
pub struct HostMonitor {
    system: System,
    networks: Networks,
    last: HostSample,
}

impl HostMonitor {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            networks: Networks::new_with_refreshed_list(),
            last: HostSample {
                taken_at: Local::now(),
                bytes_sent: 0,
                bytes_received: 0,
            },
        }
    }

    /// Reads current gauges, derives throughput against the previous sample,
    /// and retains the current sample for the next cycle.
    pub fn sample(&mut self, now: DateTime<Local>) -> HostGauges {
        self.system.refresh_cpu_usage();
        self.system.refresh_memory();
        self.networks.refresh(true);

        let mut bytes_sent = 0u64;
        let mut bytes_received = 0u64;
        for (_name, data) in self.networks.iter() {
            bytes_sent += data.total_transmitted();
            bytes_received += data.total_received();
        }

        let elapsed_secs = (now - self.last.taken_at).num_milliseconds() as f64 / 1000.0;
        let send_rate = counter_rate(self.last.bytes_sent, bytes_sent, elapsed_secs);
        let recv_rate = counter_rate(self.last.bytes_received, bytes_received, elapsed_secs);

        let memory_total_bytes = self.system.total_memory();
        let memory_used_bytes = self.system.used_memory();
        let memory_percent = if memory_total_bytes > 0 {
            memory_used_bytes as f64 / memory_total_bytes as f64 * 100.0
        } else {
            0.0
        };

        self.last = HostSample {
            taken_at: now,
            bytes_sent,
            bytes_received,
        };

        HostGauges {
            cpu_percent: self.system.global_cpu_usage(),
            memory_percent,
            memory_used_bytes,
            memory_total_bytes,
            send_rate_bytes_per_sec: send_rate,
            recv_rate_bytes_per_sec: recv_rate,
        }
    }

    /// The sample retained for the next cycle's delta.
    pub fn last_sample(&self) -> HostSample {
        self.last
    }
}

impl Default for HostMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::bytes_to_human;
    use pretty_assertions::assert_eq;

    #[test]
    fn rate_over_two_seconds() {
        let rate = counter_rate(0, 2048, 2.0);
        assert_eq!(rate, 1024.0);
        assert_eq!(format!("{}/s", bytes_to_human(rate)), "1.0K/s");
    }

    #[test]
    fn backwards_counter_yields_negative_rate() {
        assert_eq!(counter_rate(4096, 0, 1.0), -4096.0);
    }

    #[test]
    fn zero_elapsed_yields_zero_rate() {
        assert_eq!(counter_rate(0, 2048, 0.0), 0.0);
    }

    #[test]
    fn monitor_retains_current_sample() {
        let mut monitor = HostMonitor::new();
        let now = Local::now();
        let _ = monitor.sample(now);
        assert_eq!(monitor.last_sample().taken_at, now);
    }
}
