use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection};
use tracing::info;
use crate::config::Config;
use crate::models::reservation::{Reservation, ReservationFilter, StoredReservation};
use crate::repositories::{RepositoryError, ReservationRepo};

pub struct MongoConnectionRepo {
    client: Client,
    reservations: Collection<Reservation>,
}

impl MongoConnectionRepo {
    pub fn new(
        client: Client,
        database_name: &str,
        collection_name: &str,
    ) -> Self {
        let reservations = client
            .database(database_name)
            .collection::<Reservation>(collection_name);

        Self {
            client,
            reservations,
        }
    }

    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(&config.mongo_uri)
            .await
            .context("Failed to create a MongoDB client from the configured URI")?;

        info!(
            "MongoDB client ready, using collection {}.{}",
            config.database_name,
            config.collection_name,
        );
        Ok(Self::new(client, &config.database_name, &config.collection_name))
    }
}

#[async_trait]
impl ReservationRepo for MongoConnectionRepo {
    async fn insert_reservation(
        &self,
        reservation: &Reservation,
    ) -> Result<ObjectId, RepositoryError> {
        let result = self.reservations
            .insert_one(reservation, None)
            .await?;

        match result.inserted_id.as_object_id() {
            Some(id) => Ok(id),
            None => Err(RepositoryError::UnexpectedIdentifier(result.inserted_id)),
        }
    }

    async fn find_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<StoredReservation>, RepositoryError> {
        let query = doc! {
            "roomName": filter.room_name.as_str(),
            "date": filter.date.as_str(),
        };

        let cursor = self.reservations
            .clone_with_type::<StoredReservation>()
            .find(query, None)
            .await?;

        let reservations: Vec<StoredReservation> = cursor.try_collect().await?;
        Ok(reservations)
    }

    async fn shutdown(&self) {
        info!("Closing MongoDB client");
        self.client.clone().shutdown().await;
    }
}
