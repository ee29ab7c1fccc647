use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::director::model::Director;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateDirectorRequest {
    /// Explicit identifier; assigned by the store when omitted.
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateDirectorRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DirectorResponse {
    pub id: i64,
    pub name: String,
}

impl From<Director> for DirectorResponse {
    fn from(d: Director) -> Self {
        Self {
            id: d.id,
            name: d.name,
        }
    }
}
