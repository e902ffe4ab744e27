//! Survey rows.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A row of `fish_survey`. `fish_count` is stored as text and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Survey {
    pub id: Uuid,
    pub survey_id: i32,
    #[schema(example = "05/07/2017")]
    pub event_date: Option<String>,
    #[schema(example = 2017)]
    pub event_date_year: Option<i32>,
    pub survey_ranked_easting: Option<i32>,
    pub survey_ranked_northing: Option<i32>,
    pub species_id: Option<i32>,
    pub area_id: Option<String>,
    #[schema(example = "5")]
    pub fish_count: Option<String>,
}

impl Survey {
    /// The fish count as a number, `None` when empty or not numeric.
    pub fn parsed_fish_count(&self) -> Option<i64> {
        self.fish_count
            .as_deref()
            .map(str::trim)
            .filter(|count| !count.is_empty())
            .and_then(|count| count.parse().ok())
    }
}
