//! Statistics collection and reporting
//!
//! Counts what a run wrote to its sink. Only events that reached the sink are
//! counted, so a failed run reports what the destination actually holds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::events::ResearchEvent;
use crate::types::RecordId;

/// Counters for one generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatistics {
    /// Visits fully written, END marker included
    pub visits_generated: usize,
    /// Research events written
    pub research_events: usize,
    /// END markers written
    pub end_events: usize,
    /// Document pairs written
    pub records_written: usize,
    /// First record identifier written
    pub first_record_id: Option<RecordId>,
    /// Last record identifier written
    pub last_record_id: Option<RecordId>,
    /// Research events per currency pair label
    pub major_pair_counts: BTreeMap<String, usize>,
    /// Research events per indicator label
    pub indicator_counts: BTreeMap<String, usize>,
    /// Research events per interval label
    pub interval_counts: BTreeMap<String, usize>,
    /// When the run started
    pub started_at: DateTime<Utc>,
    /// Wall time spent generating
    pub duration: Duration,
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStatistics {
    /// Empty statistics stamped with the current time
    pub fn new() -> Self {
        Self {
            visits_generated: 0,
            research_events: 0,
            end_events: 0,
            records_written: 0,
            first_record_id: None,
            last_record_id: None,
            major_pair_counts: BTreeMap::new(),
            indicator_counts: BTreeMap::new(),
            interval_counts: BTreeMap::new(),
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
        }
    }

    /// Count an event that was appended to the sink
    pub fn record_event(&mut self, event: &ResearchEvent) {
        self.records_written += 1;
        self.first_record_id.get_or_insert(event.record_id);
        self.last_record_id = Some(event.record_id);

        if event.is_end() {
            self.end_events += 1;
        } else {
            self.research_events += 1;
            bump(&mut self.major_pair_counts, event.major_pair_label());
            bump(&mut self.indicator_counts, event.indicator_label());
            bump(&mut self.interval_counts, event.interval_label());
        }
    }

    /// Count a completed visit
    pub fn record_visit(&mut self) {
        self.visits_generated += 1;
    }

    /// Set the elapsed generation time
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Average research events per visit
    pub fn average_events_per_visit(&self) -> f64 {
        if self.visits_generated == 0 {
            0.0
        } else {
            self.research_events as f64 / self.visits_generated as f64
        }
    }

    /// Share of research events carrying `label` within `counts`, as a percentage
    pub fn percentage(&self, counts: &BTreeMap<String, usize>, label: &str) -> f64 {
        if self.research_events == 0 {
            return 0.0;
        }
        let count = counts.get(label).copied().unwrap_or(0);
        count as f64 / self.research_events as f64 * 100.0
    }

    /// One-line summary
    pub fn compact_summary(&self) -> String {
        format!(
            "{} visits, {} records ({} research, {} END) in {:.2}s",
            self.visits_generated,
            self.records_written,
            self.research_events,
            self.end_events,
            self.duration.as_secs_f64()
        )
    }

    /// Multi-line report for stderr
    pub fn summary_output(&self) -> String {
        let mut output = String::new();

        output.push_str("Session bundle complete\n");
        output.push_str("=======================\n");
        output.push_str(&format!("Started: {}\n", self.started_at.to_rfc3339()));
        output.push_str(&format!("Duration: {:.2} seconds\n", self.duration.as_secs_f64()));
        output.push_str(&format!("Visits: {}\n", self.visits_generated));
        output.push_str(&format!(
            "Records written: {} ({} research, {} END)\n",
            self.records_written, self.research_events, self.end_events
        ));
        if self.visits_generated > 0 {
            output.push_str(&format!(
                "Average research events per visit: {:.1}\n",
                self.average_events_per_visit()
            ));
        }
        match (self.first_record_id, self.last_record_id) {
            (Some(first), Some(last)) => {
                output.push_str(&format!("Record ids: {}..={}\n", first, last));
            }
            _ => output.push_str("Record ids: none\n"),
        }

        for (title, counts) in [
            ("Currency pairs", &self.major_pair_counts),
            ("Indicators", &self.indicator_counts),
            ("Intervals", &self.interval_counts),
        ] {
            if counts.is_empty() {
                continue;
            }
            output.push_str(&format!("\n{}:\n", title));
            for (label, count) in counts {
                output.push_str(&format!(
                    "  {:<10} {:>8} ({:.1}%)\n",
                    label,
                    count,
                    self.percentage(counts, label)
                ));
            }
        }

        output
    }
}

impl fmt::Display for RunStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compact_summary())
    }
}

fn bump(counts: &mut BTreeMap<String, usize>, label: &str) {
    *counts.entry(label.to_string()).or_insert(0) += 1;
}
