//! Consolidated run statistics
//!
//! The run reports aggregate counts, never per-item diagnostics.

use std::time::Duration;

use crate::workload::checkin::CheckinStats;
use crate::workload::synthesizer::SynthesisStats;

/// Aggregate statistics for one seeding run
#[derive(Debug, Clone, Default)]
pub struct SeedStatistics {
    /// Counters from the synthesis pass
    pub synthesis: SynthesisStats,
    /// Counters from the check-in pass
    pub checkin: CheckinStats,
    /// Wall-clock duration of the run
    pub run_duration: Option<Duration>,
}

impl SeedStatistics {
    /// Assemble statistics from the two passes
    pub fn new(synthesis: SynthesisStats, checkin: CheckinStats) -> Self {
        Self { synthesis, checkin, run_duration: None }
    }

    /// Record the run's wall-clock duration
    pub fn set_run_duration(&mut self, duration: Duration) {
        self.run_duration = Some(duration);
    }

    /// Share of submissions the store rejected as conflicts
    pub fn conflict_percentage(&self) -> f64 {
        if self.synthesis.bookings_attempted == 0 {
            0.0
        } else {
            self.synthesis.conflicts as f64 / self.synthesis.bookings_attempted as f64 * 100.0
        }
    }

    /// Share of created bookings that received a check-in
    pub fn checkin_percentage(&self) -> f64 {
        if self.synthesis.bookings_created == 0 {
            0.0
        } else {
            self.checkin.checkins_applied as f64 / self.synthesis.bookings_created as f64 * 100.0
        }
    }

    /// Render the human-readable run summary
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("Seeding Run Summary\n");
        out.push_str("===================\n");
        out.push_str(&format!(
            "  Resources: {} visited, {} skipped (empty roster)\n",
            self.synthesis.resources_visited, self.synthesis.resources_skipped
        ));
        out.push_str(&format!(
            "  Bookings: {} attempted, {} created, {} skipped as conflicts ({:.1}%)\n",
            self.synthesis.bookings_attempted,
            self.synthesis.bookings_created,
            self.synthesis.conflicts,
            self.conflict_percentage()
        ));
        out.push_str(&format!(
            "  Check-ins: {} applied ({:.1}% of created), {} skipped (booking gone), {} pre-existing\n",
            self.checkin.checkins_applied,
            self.checkin_percentage(),
            self.checkin.checkins_missing,
            self.checkin.already_checked_in
        ));
        if let Some(duration) = self.run_duration {
            out.push_str(&format!("  Runtime: {:.2} seconds\n", duration.as_secs_f64()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SeedStatistics {
        SeedStatistics::new(
            SynthesisStats {
                resources_visited: 4,
                resources_skipped: 1,
                bookings_attempted: 100,
                bookings_created: 80,
                conflicts: 20,
            },
            CheckinStats {
                bookings_seen: 80,
                already_checked_in: 0,
                not_selected: 20,
                checkins_applied: 60,
                checkins_missing: 0,
            },
        )
    }

    #[test]
    fn test_percentages() {
        let stats = stats();
        assert!((stats.conflict_percentage() - 20.0).abs() < f64::EPSILON);
        assert!((stats.checkin_percentage() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_percentages_with_no_bookings() {
        let stats = SeedStatistics::default();
        assert_eq!(stats.conflict_percentage(), 0.0);
        assert_eq!(stats.checkin_percentage(), 0.0);
    }

    #[test]
    fn test_summary_mentions_aggregate_counts() {
        let mut stats = stats();
        stats.set_run_duration(Duration::from_millis(1500));
        let summary = stats.summary();
        assert!(summary.contains("100 attempted"));
        assert!(summary.contains("80 created"));
        assert!(summary.contains("20 skipped as conflicts"));
        assert!(summary.contains("60 applied"));
        assert!(summary.contains("1.50 seconds"));
    }
}
