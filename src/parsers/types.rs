/// One successfully parsed `<timestamp> -> <data> <clock>` line
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogRecord {
    /// Elapsed seconds since midnight
    pub timestamp: f64,
    pub data_bit: u8,
    pub clock_bit: u8,
}

/// Parsed signal log: three index-aligned sequences in file order.
///
/// Element `i` of [`times`](Self::times), [`data`](Self::data) and
/// [`clock`](Self::clock) all come from the same source line. The fields are
/// private so the sequences can only grow together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedLog {
    times: Vec<f64>,
    data: Vec<u8>,
    clock: Vec<u8>,
}

impl ParsedLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            times: Vec::with_capacity(capacity),
            data: Vec::with_capacity(capacity),
            clock: Vec::with_capacity(capacity),
        }
    }

    /// Append one record to all three sequences
    pub fn push(&mut self, record: LogRecord) {
        self.times.push(record.timestamp);
        self.data.push(record.data_bit);
        self.clock.push(record.clock_bit);
    }

    /// Sample times in seconds
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Data line levels (0 or 1)
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Clock line levels (0 or 1)
    pub fn clock(&self) -> &[u8] {
        &self.clock
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Get a single record back by index
    pub fn get(&self, index: usize) -> Option<LogRecord> {
        Some(LogRecord {
            timestamp: *self.times.get(index)?,
            data_bit: *self.data.get(index)?,
            clock_bit: *self.clock.get(index)?,
        })
    }

    /// First and last sample time, if any samples exist
    pub fn time_span(&self) -> Option<(f64, f64)> {
        match (self.times.first(), self.times.last()) {
            (Some(&first), Some(&last)) => Some((first, last)),
            _ => None,
        }
    }
}

impl FromIterator<LogRecord> for ParsedLog {
    fn from_iter<I: IntoIterator<Item = LogRecord>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut log = ParsedLog::with_capacity(iter.size_hint().0);
        for record in iter {
            log.push(record);
        }
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: f64, data_bit: u8, clock_bit: u8) -> LogRecord {
        LogRecord {
            timestamp,
            data_bit,
            clock_bit,
        }
    }

    #[test]
    fn test_collect_keeps_sequences_aligned() {
        let log: ParsedLog = vec![record(1.0, 1, 0), record(2.0, 0, 1), record(3.0, 1, 1)]
            .into_iter()
            .collect();

        assert_eq!(log.len(), 3);
        assert_eq!(log.times(), &[1.0, 2.0, 3.0]);
        assert_eq!(log.data(), &[1, 0, 1]);
        assert_eq!(log.clock(), &[0, 1, 1]);
        assert_eq!(log.get(1), Some(record(2.0, 0, 1)));
        assert_eq!(log.get(3), None);
    }

    #[test]
    fn test_time_span() {
        assert_eq!(ParsedLog::default().time_span(), None);

        let log: ParsedLog = vec![record(5.0, 0, 0), record(7.5, 1, 0)]
            .into_iter()
            .collect();
        assert_eq!(log.time_span(), Some((5.0, 7.5)));
    }
}
