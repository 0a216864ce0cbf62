use log::error;
use serde::Deserialize;
use shared::{DashboardAnalyticsDto, ItemAnalysisDto, ItemViewsDto};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::analytics::get_dashboard_analytics;
use crate::components::data_table::{Column, DataTable};
use crate::fetch::{FetchState, RequestSeq};

/// Query-string parameters recognized by the dashboard route.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub restaurant: Option<String>,
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let location = use_location();
    let restaurant: Option<String> = location
        .as_ref()
        .and_then(|loc| loc.query::<DashboardQuery>().ok())
        .and_then(|q| q.restaurant)
        .filter(|id| !id.is_empty());

    let state = use_state(|| FetchState::<Option<DashboardAnalyticsDto>>::Idle);
    let seq = use_mut_ref(RequestSeq::default);

    {
        let state = state.clone();
        use_effect_with(restaurant.clone(), move |restaurant| {
            // Capture the filter at issue time; the ticket identifies this
            // request if it resolves after a newer one was issued.
            let restaurant = restaurant.clone();
            let ticket = seq.borrow_mut().issue();
            state.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                let outcome = get_dashboard_analytics(restaurant.as_deref())
                    .await
                    .map_err(|e| {
                        error!("Dashboard analytics fetch failed: {}", e);
                        e.to_string()
                    });
                if seq.borrow().is_current(ticket) {
                    state.set(FetchState::resolved(outcome));
                }
            });

            || ()
        });
    }

    match &*state {
        FetchState::Idle | FetchState::Loading => html! {
            <div class="p-8">{"Loading analytics data..."}</div>
        },
        FetchState::Failure(message) => html! {
            <div class="p-8 text-red-500">{"Error: "}{message}</div>
        },
        FetchState::Success(None) => html! {
            <div class="p-8">{"No analytics data available"}</div>
        },
        FetchState::Success(Some(data)) => render_dashboard(data, restaurant.as_deref()),
    }
}

fn render_dashboard(data: &DashboardAnalyticsDto, restaurant: Option<&str>) -> Html {
    html! {
        <div class="max-w-6xl mx-auto p-8">
            <header class="mb-8">
                <h1 class="text-3xl font-bold mb-2">{"MenuVista Analytics Dashboard"}</h1>
                if let Some(id) = restaurant {
                    <h2 class="text-xl mb-2">{"Restaurant: "}{id}</h2>
                }
            </header>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-10">
                <div class="bg-white p-6 rounded-lg shadow-md">
                    <h3 class="text-xl font-semibold mb-2">{"Total Sessions"}</h3>
                    <p class="text-3xl">{data.session_count}</p>
                </div>
            </div>

            <div class="mb-10">
                <h2 class="text-2xl font-bold mb-4">{"Most Viewed Menu Items"}</h2>
                <div class="bg-white p-6 rounded-lg shadow-md">
                    <DataTable
                        columns={item_columns()}
                        rows={views_rows(&data.most_viewed_items)}
                        empty_message="No view data available yet. Try interacting with the menu."
                    />
                </div>
            </div>

            <div class="mb-10">
                <h2 class="text-2xl font-bold mb-4">{"Popular Categories"}</h2>
                <div class="bg-white p-6 rounded-lg shadow-md">
                    <DataTable
                        columns={category_columns()}
                        rows={views_rows(&data.popular_categories)}
                        empty_message="No category data available yet. Try changing menu tabs."
                    />
                </div>
            </div>

            <div class="mb-10">
                <h2 class="text-2xl font-bold mb-4">{"Menu Item Analysis"}</h2>
                <div class="bg-white p-6 rounded-lg shadow-md overflow-x-auto">
                    <DataTable
                        columns={analysis_columns()}
                        rows={analysis_rows(&data.item_analysis)}
                        empty_message="No item analysis data available yet."
                    />
                </div>
            </div>

            <div class="mt-8">
                // Fixed path, deliberately not derived from the active filter.
                <a href="/sababa-falafel" class="text-blue-600 hover:underline">
                    {"← Back to Restaurant"}
                </a>
            </div>
        </div>
    }
}

fn item_columns() -> Vec<Column> {
    vec![Column::text("Item"), Column::numeric("Views")]
}

fn category_columns() -> Vec<Column> {
    vec![Column::text("Category"), Column::numeric("Views")]
}

fn analysis_columns() -> Vec<Column> {
    vec![
        Column::text("Item"),
        Column::numeric("Views"),
        Column::numeric("Avg. View Time (sec)"),
        Column::text("Category"),
    ]
}

/// Table rows for a name/views sequence, in the sequence's given order.
pub fn views_rows(entries: &[ItemViewsDto]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| vec![e.name.clone(), e.views.to_string()])
        .collect()
}

/// Table rows for the combined item analysis, in the sequence's given order.
pub fn analysis_rows(entries: &[ItemAnalysisDto]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|e| {
            vec![
                e.name.clone(),
                e.views.to_string(),
                e.avg_view_time.to_string(),
                e.category.clone(),
            ]
        })
        .collect()
}
