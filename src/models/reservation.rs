use std::collections::HashMap;
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::models::validation::{FieldReader, FieldViolation, Validate};

pub const RESERVATION_CREATED: &str = "Reservation created";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub room_name: String,
    pub topic: String,
    pub attendees: Vec<String>,
    pub selected_time: Vec<String>,
    pub date: String,
}

impl Validate for Reservation {
    fn validate(value: Value) -> Result<Self, Vec<FieldViolation>> {
        let mut reader = FieldReader::new(&value)?;
        let room_name = reader.string("roomName");
        let topic = reader.string("topic");
        let attendees = reader.string_list("attendees");
        let selected_time = reader.string_list("selectedTime");
        let date = reader.string("date");

        match (room_name, topic, attendees, selected_time, date) {
            (Some(room_name), Some(topic), Some(attendees), Some(selected_time), Some(date)) => {
                Ok(Reservation {
                    room_name,
                    topic,
                    attendees,
                    selected_time,
                    date,
                })
            }
            _ => Err(reader.into_violations()),
        }
    }
}

/// A reservation as it sits in the collection, with its generated id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StoredReservation {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub reservation: Reservation,
}

/// Response shape of a stored reservation: the id is rendered as a hex string.
#[derive(Serialize, Clone, Debug)]
pub struct ReservationView {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub reservation: Reservation,
}

impl From<StoredReservation> for ReservationView {
    fn from(stored: StoredReservation) -> Self {
        Self {
            id: stored.id.to_hex(),
            reservation: stored.reservation,
        }
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct CreatedReservation {
    pub message: &'static str,
    pub id: String,
}

impl From<ObjectId> for CreatedReservation {
    fn from(id: ObjectId) -> Self {
        Self {
            message: RESERVATION_CREATED,
            id: id.to_hex(),
        }
    }
}

/// Exact-match lookup on room and date.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReservationFilter {
    pub room_name: String,
    pub date: String,
}

impl ReservationFilter {
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, Vec<FieldViolation>> {
        let room_name = params.get("roomName");
        let date = params.get("date");

        match (room_name, date) {
            (Some(room_name), Some(date)) => Ok(Self {
                room_name: room_name.clone(),
                date: date.clone(),
            }),
            _ => {
                let violations = [("roomName", room_name), ("date", date)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| FieldViolation::new(field, "query parameter required"))
                    .collect();
                Err(violations)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_a_complete_payload() {
        let reservation = Reservation::validate(json!({
            "roomName": "large",
            "topic": "weekly sync",
            "attendees": ["kim", "lee"],
            "selectedTime": ["10:00", "10:30"],
            "date": "2024-11-05",
            "ignored": true,
        }))
        .unwrap();

        assert_eq!(
            reservation,
            Reservation {
                room_name: "large".to_string(),
                topic: "weekly sync".to_string(),
                attendees: vec!["kim".to_string(), "lee".to_string()],
                selected_time: vec!["10:00".to_string(), "10:30".to_string()],
                date: "2024-11-05".to_string(),
            }
        );
    }

    #[test]
    fn lists_every_missing_or_mistyped_field() {
        let violations = Reservation::validate(json!({
            "roomName": "small",
            "topic": null,
            "selectedTime": "10:00",
        }))
        .unwrap_err();

        assert_eq!(
            violations,
            vec![
                FieldViolation::new("topic", "expected a string"),
                FieldViolation::new("attendees", "field required"),
                FieldViolation::new("selectedTime", "expected an array of strings"),
                FieldViolation::new("date", "field required"),
            ]
        );
    }

    #[test]
    fn date_format_is_not_checked() {
        let reservation = Reservation::validate(json!({
            "roomName": "small",
            "topic": "t",
            "attendees": [],
            "selectedTime": [],
            "date": "next tuesday",
        }))
        .unwrap();

        assert_eq!(reservation.date, "next tuesday");
    }

    #[test]
    fn view_renders_the_id_as_hex() {
        let id = ObjectId::parse_str("65a1f0c2e4b0a1b2c3d4e5f6").unwrap();
        let view = ReservationView::from(StoredReservation {
            id,
            reservation: Reservation {
                room_name: "large".to_string(),
                topic: "retro".to_string(),
                attendees: vec![],
                selected_time: vec!["15:00".to_string()],
                date: "2024-11-05".to_string(),
            },
        });

        assert_eq!(
            serde_json::to_value(&view).unwrap(),
            json!({
                "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
                "roomName": "large",
                "topic": "retro",
                "attendees": [],
                "selectedTime": ["15:00"],
                "date": "2024-11-05",
            })
        );
    }

    #[test]
    fn filter_requires_both_query_parameters() {
        let params = HashMap::from([("date".to_string(), "2024-11-05".to_string())]);

        assert_eq!(
            ReservationFilter::from_query(&params).unwrap_err(),
            vec![FieldViolation::new("roomName", "query parameter required")]
        );
    }
}
