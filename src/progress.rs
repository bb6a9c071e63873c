//! Optional count bar over the posts of a run.

use indicatif::{ProgressBar, ProgressStyle};

/// Count-style progress bar (posts processed out of total), with a label.
pub fn make_post_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] elapsed: {elapsed_precise}",
    ) {
        pb.set_style(style.progress_chars("█▉▊▋▌▍▎▏  "));
    }
    if !label.is_empty() {
        pb.set_message(label.to_string());
    }
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Wraps an optional bar so the run loop does not branch on `progress` at every step.
pub struct PostProgress {
    pb: Option<ProgressBar>,
}

impl PostProgress {
    pub fn new(enabled: bool, total: usize) -> Self {
        let pb = enabled.then(|| make_post_progress(total as u64, "Posts"));
        Self { pb }
    }
    pub fn set_current(&self, what: &str) {
        if let Some(pb) = &self.pb { pb.set_message(format!("Posts: {what}")); }
    }
    #[inline] pub fn inc(&self) { if let Some(pb) = &self.pb { pb.inc(1); } }
    pub fn finish(&self) {
        if let Some(pb) = &self.pb { pb.finish_with_message("Posts: done"); }
    }
}
