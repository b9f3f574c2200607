use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistQuestionDto {
    pub id: i32,
    pub question: String,
    pub field_type: String,
    pub options: Vec<String>,
    pub required: bool,
    pub sort_order: i32,
}

/// Body of `POST /api/admin/questions`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionDto {
    pub question: String,
    pub field_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_required")]
    pub required: bool,
}

/// Body of `PUT /api/admin/questions/{id}`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuestionDto {
    pub question: String,
    pub field_type: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default = "default_required")]
    pub required: bool,
}

/// Body of `PUT /api/admin/questions/reorder`: the full question set in
/// its new display order.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderQuestionsDto {
    pub ordered_ids: Vec<i32>,
}

fn default_required() -> bool {
    true
}
