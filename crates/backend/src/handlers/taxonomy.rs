use axum::Json;
use contracts::shared::taxonomy::{taxonomy, Taxonomy};

/// GET /api/taxonomy
pub async fn get_taxonomy() -> Json<&'static Taxonomy> {
    Json(taxonomy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_taxonomy_payload() {
        let Json(body) = get_taxonomy().await;
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json[0]["slug"], "technology");
        assert_eq!(json.as_array().unwrap().len(), 5);
    }
}
