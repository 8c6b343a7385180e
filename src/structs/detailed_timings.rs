use serde::{Deserialize, Serialize};

/// Display-formatted timing metrics, `"N/A"` when the provider had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedTimings {
    pub first_contentful_paint: String,
    pub speed_index: String,
    pub largest_contentful_paint: String,
    pub total_blocking_time: String,
    pub time_to_interactive: String,
    pub cumulative_layout_shift: String,
}
