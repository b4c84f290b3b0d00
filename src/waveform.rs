//! Step waveform helpers shared by the chart.
//!
//! A level holds from its sample time until the next sample, so the value at
//! time `t` is the value of the most recent sample at or before `t`.

/// Expand samples into the vertices of a step ("post") line.
///
/// Every sample after the first is preceded by a vertex at its own time
/// carrying the previous level, so straight segments between vertices draw
/// horizontal holds and vertical jumps.
pub fn step_points(times: &[f64], levels: &[u8]) -> Vec<[f64; 2]> {
    let n = times.len().min(levels.len());
    let mut points = Vec::with_capacity(n.saturating_mul(2));

    for i in 0..n {
        if i > 0 && levels[i] != levels[i - 1] {
            points.push([times[i], f64::from(levels[i - 1])]);
        }
        points.push([times[i], f64::from(levels[i])]);
    }

    points
}

/// Level of the most recent sample at or before `time`.
///
/// Chronological `times` use a binary search. A timeline that wraps (a capture
/// across midnight) falls back to a scan for the greatest time not after
/// `time`; equal times resolve to the later line. Returns `None` before the
/// first sample.
pub fn level_at(times: &[f64], levels: &[u8], time: f64) -> Option<u8> {
    let n = times.len().min(levels.len());
    let times = &times[..n];

    if times.windows(2).all(|w| w[0] <= w[1]) {
        let idx = times.partition_point(|&t| t <= time);
        return idx.checked_sub(1).map(|i| levels[i]);
    }

    times
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t <= time)
        .fold(None, |best: Option<(usize, f64)>, (i, &t)| match best {
            Some((_, best_t)) if best_t > t => best,
            _ => Some((i, t)),
        })
        .map(|(i, _)| levels[i])
}

/// Format time in seconds to a human-readable string (h:mm:ss.xxx or m:ss.xxx or s.xxx)
pub fn format_time(seconds: f64) -> String {
    let total_seconds = seconds.abs();
    let hours = (total_seconds / 3600.0).floor() as u32;
    let minutes = ((total_seconds % 3600.0) / 60.0).floor() as u32;
    let secs = total_seconds % 60.0;

    let sign = if seconds < 0.0 { "-" } else { "" };

    if hours > 0 {
        format!("{}{}:{:02}:{:06.3}", sign, hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}{}:{:06.3}", sign, minutes, secs)
    } else {
        format!("{}{:.3}s", sign, secs)
    }
}
