pub mod dto {
    pub mod analytics;
}

// Re-export commonly used items
pub use dto::analytics::{DashboardAnalyticsDto, ItemAnalysisDto, ItemViewsDto};
