//! Progress bar display for corpus scans

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for check runs
pub struct ScanProgress {
    skill_pb: ProgressBar,
}

impl ScanProgress {
    /// Create a new progress display with total skill count
    pub fn new(total_skills: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let skill_pb = ProgressBar::new(total_skills);
        skill_pb.set_style(style);

        Self { skill_pb }
    }

    /// Update to show the skill currently being checked
    pub fn update_skill(&self, skill_name: &str, current: usize, total: usize) {
        let msg = format!("({}/{}) {}", current, total, skill_name);
        self.skill_pb.set_message(msg);
    }

    /// Increment skill progress
    pub fn inc(&self) {
        self.skill_pb.inc(1);
    }

    /// Finish and clear the bar so the report prints on a clean line
    pub fn finish(&self) {
        self.skill_pb.finish_and_clear();
    }
}
