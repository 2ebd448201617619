//! Output configuration types

/// Configuration for the console report.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print the directory tree before the statistics
    pub show_tree: bool,
    /// Print created/modified timestamps next to each tree entry
    pub show_dates: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_tree: true,
            show_dates: true,
        }
    }
}
