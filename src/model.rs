use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightRecord {
    #[serde(rename = "pynkt")]
    pub destination: String,
    #[serde(rename = "numb")]
    pub flight_number: i64,
    #[serde(rename = "samolet", default, skip_serializing_if = "Option::is_none")]
    pub aircraft_type: Option<String>,
}

impl FlightRecord {
    pub fn new(
        destination: impl Into<String>,
        flight_number: i64,
        aircraft_type: Option<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            flight_number,
            aircraft_type,
        }
    }

    pub fn aircraft_type_or_empty(&self) -> &str {
        self.aircraft_type.as_deref().unwrap_or("")
    }
}

pub fn add_record(flights: &mut Vec<FlightRecord>, record: FlightRecord) {
    flights.push(record);
}
