use serde::{Deserialize, Serialize};
use validator::Validate;

/// Aggregate usage metrics returned by `/api/analytics/dashboard`.
///
/// The three sequence fields are optional on the wire. `#[serde(default)]`
/// collapses a missing field and an empty array into the same value at the
/// deserialization boundary, so consumers only ever see a (possibly empty)
/// `Vec` and never have to null-check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalyticsDto {
    /// Total number of tracked browsing sessions.
    pub session_count: u64,
    /// Menu items by view count, in server-determined order.
    #[serde(default)]
    pub most_viewed_items: Vec<ItemViewsDto>,
    /// Menu categories by view count, in server-determined order.
    #[serde(default)]
    pub popular_categories: Vec<ItemViewsDto>,
    /// Combined per-item breakdown, in server-determined order.
    #[serde(default)]
    pub item_analysis: Vec<ItemAnalysisDto>,
}

/// A named entry with its view count; used for both menu items and categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemViewsDto {
    pub name: String,
    pub views: u64,
}

/// One row of the combined menu-item analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ItemAnalysisDto {
    pub name: String,
    pub views: u64,
    /// Average time spent viewing the item, in seconds.
    #[validate(range(min = 0.0))]
    pub avg_view_time: f64,
    pub category: String,
}
