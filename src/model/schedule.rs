use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Meals served on one day, each list holding raw NEIS rows.
#[derive(Serialize, Deserialize, ToSchema, Debug, Default)]
pub struct MealPlanDto {
    pub breakfast: Vec<Value>,
    pub lunch: Vec<Value>,
    pub dinner: Vec<Value>,
}
