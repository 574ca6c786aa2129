//! Upload progress reporting

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};

/// Percentage reporter for streaming uploads
pub struct UploadProgress {
    last_percent: AtomicU64,
}

impl UploadProgress {
    pub fn new() -> Self {
        Self {
            last_percent: AtomicU64::new(u64::MAX),
        }
    }

    /// Called from the upload stream as chunks transmit
    pub fn update(&self, sent: u64, total: u64) {
        if total == 0 {
            return;
        }
        let percent = sent * 100 / total;
        if self.last_percent.swap(percent, Ordering::Relaxed) != percent {
            eprint!("\rUploading... {:>3}%", percent);
            io::stderr().flush().ok();
        }
    }

    pub fn finish() {
        eprintln!("\rUploading... done ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerates_zero_total() {
        let progress = UploadProgress::new();
        progress.update(0, 0);
    }
}
