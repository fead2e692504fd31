use std::sync::Arc;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson};
use thiserror::Error;
use crate::models::reservation::{Reservation, ReservationFilter, StoredReservation};

#[cfg(test)]
pub mod memory_repo;
pub mod mongo_repo;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("MongoDB error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("store generated a non-ObjectId identifier: {0}")]
    UnexpectedIdentifier(Bson),
}

pub type DynReservationRepo = Arc<dyn ReservationRepo>;

#[async_trait]
pub trait ReservationRepo: Send + Sync {
    /// Persists one reservation and returns the identifier the store generated for it.
    async fn insert_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<ObjectId, RepositoryError>;

    /// Every stored reservation matching the filter exactly, in storage order.
    async fn find_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<StoredReservation>, RepositoryError>;

    async fn shutdown(&self);
}
