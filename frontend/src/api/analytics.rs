use gloo_net::http::Request;
use log::debug;
use shared::DashboardAnalyticsDto;
use thiserror::Error;

use crate::api::api_url;

/// Failure classes on the dashboard fetch path. The dashboard collapses all
/// of them into a single user-facing message; the distinction only survives
/// in the message text.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Failed to fetch analytics data: {0}")]
    Network(String),
    #[error("Analytics request failed with status {0}")]
    Http(u16),
    #[error("Failed to parse analytics response: {0}")]
    Parse(String),
}

/// Builds the dashboard query URL. The `restaurant` parameter is present
/// exactly when a filter is given; its value is percent-encoded.
pub fn dashboard_url(restaurant: Option<&str>) -> String {
    match restaurant {
        Some(id) => format!(
            "{}?restaurant={}",
            api_url("/api/analytics/dashboard"),
            urlencoding::encode(id)
        ),
        None => api_url("/api/analytics/dashboard"),
    }
}

/// Fetches the aggregate dashboard metrics, optionally scoped to a single
/// restaurant. A 2xx response carrying a JSON `null` body yields `Ok(None)`.
/// The body of a non-2xx response is not assumed to be parseable and is
/// never read.
pub async fn get_dashboard_analytics(
    restaurant: Option<&str>,
) -> Result<Option<DashboardAnalyticsDto>, AnalyticsError> {
    let url = dashboard_url(restaurant);
    debug!("Fetching dashboard analytics from {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| AnalyticsError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(AnalyticsError::Http(response.status()));
    }

    let payload = response
        .json::<Option<DashboardAnalyticsDto>>()
        .await
        .map_err(|e| AnalyticsError::Parse(e.to_string()))?;

    debug!("{}", received_log(&payload));
    Ok(payload)
}

/// Log line for a successful response; an empty (`null`) body is reported
/// as such rather than as a zero-session payload.
fn received_log(payload: &Option<DashboardAnalyticsDto>) -> String {
    match payload {
        Some(data) => format!(
            "Dashboard analytics received ({} sessions)",
            data.session_count
        ),
        None => "Dashboard analytics received with no data".to_string(),
    }
}
