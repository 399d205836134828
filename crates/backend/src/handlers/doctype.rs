use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::system::frappe::{GetDoctypeResponse, MethodError};
use serde::Deserialize;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct DoctypeQuery {
    pub doctype: Option<String>,
}

/// GET /api/method/frappe.desk.form.load.getdoctype?doctype=...
pub async fn get_doctype(
    State(state): State<AppState>,
    Query(query): Query<DoctypeQuery>,
) -> Result<Json<GetDoctypeResponse>, (StatusCode, Json<MethodError>)> {
    let Some(doctype) = query.doctype.filter(|d| !d.trim().is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(MethodError {
                exc_type: "MandatoryError".to_string(),
                message: Some("doctype is required".to_string()),
            }),
        ));
    };

    match state.fixtures.doctype_bundle(&doctype) {
        Some(docs) => Ok(Json(GetDoctypeResponse { docs })),
        None => {
            tracing::warn!("doctype '{}' requested but not defined", doctype);
            Err((
                StatusCode::NOT_FOUND,
                Json(MethodError {
                    exc_type: "DoesNotExistError".to_string(),
                    message: Some(format!("DocType {doctype} not found")),
                }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures::FixtureStore;
    use contracts::shared::metadata::{DocTypeMeta, FieldDescriptor, FieldType};
    use contracts::shared::routing::RoutingMap;

    fn state() -> AppState {
        let meta = DocTypeMeta {
            name: "CG Branch".to_string(),
            module: None,
            fields: vec![FieldDescriptor::new("branch_name", FieldType::Data)],
        };
        AppState::new(FixtureStore::new(RoutingMap::new(), vec![meta]).unwrap())
    }

    fn query(doctype: Option<&str>) -> Query<DoctypeQuery> {
        Query(DoctypeQuery {
            doctype: doctype.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_known_doctype() {
        let Json(response) = get_doctype(State(state()), query(Some("CG Branch")))
            .await
            .unwrap();
        let meta = response.into_doctype("CG Branch").unwrap();
        assert_eq!(meta.fields[0].fieldname, "branch_name");
    }

    #[tokio::test]
    async fn test_unknown_doctype_is_404() {
        let (status, Json(error)) = get_doctype(State(state()), query(Some("CG Region")))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.exc_type, "DoesNotExistError");
    }

    #[tokio::test]
    async fn test_missing_parameter_is_400() {
        for q in [None, Some(""), Some("  ")] {
            let (status, _) = get_doctype(State(state()), query(q)).await.unwrap_err();
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
    }
}
