use crate::model::FlightRecord;
use crate::report::Reporter;

pub const NO_MATCH_WARNING: &str = "No flights to the requested destination";

pub fn select_by_destination(
    flights: &[FlightRecord],
    destination: &str,
    reporter: &dyn Reporter,
) -> Vec<FlightRecord> {
    let mut selected = Vec::new();
    for flight in flights {
        if flight.destination == destination {
            selected.push(flight.clone());
        } else {
            reporter.warn(NO_MATCH_WARNING);
        }
    }
    selected
}
