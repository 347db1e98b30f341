use super::classifier::{Classification, FilterMode, LineRecord, RejectionReason};

/// Removed-line statistics for one rejection category
#[derive(Debug, Clone)]
pub struct CategoryStats {
    pub reason: RejectionReason,
    /// Number of lines removed for this reason
    pub count: usize,
    /// First removed lines, in input order, capped by the mode's example limit
    pub examples: Vec<LineRecord>,
    limit: usize,
}

impl CategoryStats {
    fn new(reason: RejectionReason, limit: usize) -> Self {
        Self {
            reason,
            count: 0,
            examples: Vec::new(),
            limit,
        }
    }

    fn record(&mut self, record: LineRecord) {
        self.count += 1;
        if self.examples.len() < self.limit {
            self.examples.push(record);
        }
    }
}

/// Counts and examples collected during one filter run
#[derive(Debug, Clone)]
pub struct FilterSummary {
    pub mode: FilterMode,
    /// Number of non-empty input lines
    pub total_lines: usize,
    /// Number of accepted lines
    pub kept: usize,
    /// One entry per check of the mode, in priority order
    pub categories: Vec<CategoryStats>,
}

impl FilterSummary {
    pub fn new(mode: FilterMode) -> Self {
        let categories = mode
            .checks()
            .iter()
            .map(|&reason| CategoryStats::new(reason, mode.example_limit(reason)))
            .collect();

        Self {
            mode,
            total_lines: 0,
            kept: 0,
            categories,
        }
    }

    /// Account for one classified line
    pub fn record(&mut self, record: LineRecord, classification: Classification) {
        self.total_lines += 1;
        match classification {
            Classification::Accepted => self.kept += 1,
            Classification::Rejected(reason) => {
                // Classification only ever yields reasons from the mode's own checks
                if let Some(stats) = self.categories.iter_mut().find(|s| s.reason == reason) {
                    stats.record(record);
                }
            }
        }
    }

    /// Total number of removed lines across all categories
    pub fn removed(&self) -> usize {
        self.categories.iter().map(|s| s.count).sum()
    }

    pub fn has_rejections(&self) -> bool {
        self.removed() > 0
    }

    pub fn category(&self, reason: RejectionReason) -> Option<&CategoryStats> {
        self.categories.iter().find(|s| s.reason == reason)
    }

    /// Removed count for a reason, zero if the mode does not check it
    pub fn count_for(&self, reason: RejectionReason) -> usize {
        self.category(reason).map_or(0, |s| s.count)
    }

    /// Retained example lines for a reason
    pub fn examples_for(&self, reason: RejectionReason) -> &[LineRecord] {
        self.category(reason)
            .map(|s| s.examples.as_slice())
            .unwrap_or(&[])
    }
}
