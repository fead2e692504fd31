use std::collections::HashMap;
use axum::{Extension, Json, Router};
use axum::extract::Query;
use axum::routing::{get, post};
use tracing::{info, warn};
use crate::controller::AppState;
use crate::errors::ApiError;
use crate::helpers::validated_json::ValidatedJson;
use crate::models::reservation::{
    CreatedReservation, Reservation, ReservationFilter, ReservationView,
};
use crate::repositories::DynReservationRepo;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_reservation))
        .route("/get", get(get_reservations))
        .route_layer(Extension(app_state.reservation_repo))
}

pub async fn create_reservation(
    Extension(reservation_repo): Extension<DynReservationRepo>,
    ValidatedJson(reservation): ValidatedJson<Reservation>,
) -> Result<Json<CreatedReservation>, ApiError> {
    let id = reservation_repo
        .insert_reservation(&reservation)
        .await?;

    info!(
        "Created reservation {} for room {} on {}",
        id,
        reservation.room_name,
        reservation.date,
    );
    Ok(Json(CreatedReservation::from(id)))
}

pub async fn get_reservations(
    Extension(reservation_repo): Extension<DynReservationRepo>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<ReservationView>>, ApiError> {
    let filter = ReservationFilter::from_query(&params).map_err(|violations| {
        warn!("Rejected reservation lookup missing {} parameter(s)", violations.len());
        ApiError::Validation(violations)
    })?;

    let reservations = reservation_repo
        .find_reservations(&filter)
        .await?;

    Ok(Json(
        reservations
            .into_iter()
            .map(ReservationView::from)
            .collect(),
    ))
}
