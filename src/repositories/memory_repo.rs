use std::sync::Mutex;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::models::reservation::{Reservation, ReservationFilter, StoredReservation};
use crate::repositories::{RepositoryError, ReservationRepo};

/// Vec-backed stand-in for the collection, used by the handler tests.
#[derive(Default)]
pub struct InMemoryReservationRepo {
    documents: Mutex<Vec<StoredReservation>>,
}

impl InMemoryReservationRepo {
    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }
}

#[async_trait]
impl ReservationRepo for InMemoryReservationRepo {
    async fn insert_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<ObjectId, RepositoryError> {
        let id = ObjectId::new();
        self.documents.lock().unwrap().push(StoredReservation {
            id,
            reservation: reservation.clone(),
        });
        Ok(id)
    }

    async fn find_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<StoredReservation>, RepositoryError> {
        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .filter(|stored| {
                stored.reservation.room_name == filter.room_name
                    && stored.reservation.date == filter.date
            })
            .cloned()
            .collect())
    }

    async fn shutdown(&self) {}
}
