use axum::extract::State;
use axum::Json;
use contracts::shared::routing::RoutingMap;
use contracts::system::frappe::MethodResponse;

use super::AppState;

/// GET /api/method/clapgrow_app.api.routing.get_routing_map
pub async fn get_routing_map(State(state): State<AppState>) -> Json<MethodResponse<RoutingMap>> {
    Json(MethodResponse {
        message: state.fixtures.routing_map().clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::fixtures::FixtureStore;
    use contracts::shared::routing::RoutingMapEntry;

    #[tokio::test]
    async fn test_returns_configured_map() {
        let map = RoutingMap::from_entries([
            RoutingMapEntry::new("CG Task Instance", "Task", "task"),
            RoutingMapEntry::new("CG Branch", "Branch", "branch"),
        ])
        .unwrap();
        let state = AppState::new(FixtureStore::new(map.clone(), vec![]).unwrap());

        let Json(response) = get_routing_map(State(state)).await;
        assert_eq!(response.message, map);
    }
}
