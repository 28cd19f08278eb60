//! Trait abstraction for companion-page checks to enable mocking in tests

use async_trait::async_trait;
use std::path::PathBuf;

/// Advisory reachability check for the companion pages the forms redirect
/// to. Purely diagnostic: a missing page is logged, never acted on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageProbe: Send + Sync {
    /// Check whether a companion page is reachable
    async fn page_exists(&self, page: &str) -> bool;
}

/// Probe that looks for companion pages next to the site root on disk
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl PageProbe for FsProbe {
    async fn page_exists(&self, page: &str) -> bool {
        tokio::fs::try_exists(self.root.join(page))
            .await
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fs_probe_missing_page_is_false() {
        let probe = FsProbe::new(std::env::temp_dir());
        assert!(!probe.page_exists("definitely-not-here.html").await);
    }

    #[tokio::test]
    async fn test_mock_probe_answers() {
        let mut probe = MockPageProbe::new();
        probe
            .expect_page_exists()
            .withf(|page| page == "calculator.html")
            .return_const(true);
        assert!(probe.page_exists("calculator.html").await);
    }
}
