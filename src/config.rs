//! Resolver configuration.
//!
//! One immutable [`NavConfig`] is built at startup and injected into
//! [`Resolver::new`](crate::resolver::Resolver::new). There is no global
//! state to flip at runtime; hosts that want to toggle navigation swap the
//! resolver or build it disabled.

/// Configuration error.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavConfigError {
    /// `page_jump` must move at least one row.
    #[error("page_jump must be at least 1 (got {0})")]
    InvalidPageJump(usize),
}

/// Immutable navigation configuration.
///
/// # Example
///
/// ```rust
/// use dashnav::NavConfig;
///
/// let config = NavConfig::new().page_jump(20).build().unwrap();
/// assert_eq!(config.page_jump, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavConfig {
    /// Master switch; a disabled resolver ignores every event.
    pub enabled: bool,
    /// Rows moved by PageUp/PageDown in log panels.
    pub page_jump: usize,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            page_jump: 10,
        }
    }
}

impl NavConfig {
    /// Start building a configuration from the defaults.
    pub fn new() -> NavConfigBuilder {
        NavConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`NavConfig`].
#[derive(Debug, Clone)]
pub struct NavConfigBuilder {
    config: NavConfig,
}

impl NavConfigBuilder {
    /// Enable or disable navigation entirely.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    /// Rows moved by a page key in log panels.
    pub fn page_jump(mut self, rows: usize) -> Self {
        self.config.page_jump = rows;
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<NavConfig, NavConfigError> {
        if self.config.page_jump == 0 {
            return Err(NavConfigError::InvalidPageJump(0));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = NavConfig::default();
        assert!(config.enabled);
        assert_eq!(config.page_jump, 10);
    }

    #[test]
    fn builder_overrides() {
        let config = NavConfig::new()
            .enabled(false)
            .page_jump(5)
            .build()
            .unwrap();
        assert!(!config.enabled);
        assert_eq!(config.page_jump, 5);
    }

    #[test]
    fn zero_page_jump_rejected() {
        let err = NavConfig::new().page_jump(0).build().unwrap_err();
        assert_eq!(err, NavConfigError::InvalidPageJump(0));
    }
}
