use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::genre::model::Genre;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateGenreRequest {
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateGenreRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub id: i64,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(d: Genre) -> Self {
        Self {
            id: d.id,
            name: d.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_rejects_unknown_fields() {
        let err = serde_json::from_str::<CreateGenreRequest>(
            r#"{"name": "Drama", "slug": "drama"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `slug`"));
    }

    #[test]
    fn update_request_does_not_accept_an_id() {
        assert!(
            serde_json::from_str::<UpdateGenreRequest>(r#"{"id": 3, "name": "Drama"}"#)
                .is_err()
        );
    }
}
