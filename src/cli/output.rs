use crate::model::FlightRecord;
use crate::report::Reporter;

pub const EMPTY_NOTICE: &str = "List of flights is empty.";

pub fn print_flights(flights: &[FlightRecord], reporter: &dyn Reporter) {
    if flights.is_empty() {
        reporter.warn(EMPTY_NOTICE);
        return;
    }
    print!("{}", render_table(flights));
}

pub fn render_table(flights: &[FlightRecord]) -> String {
    let line = format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(4),
        "-".repeat(30),
        "-".repeat(20),
        "-".repeat(8)
    );
    let mut table = String::new();
    table.push_str(&line);
    table.push('\n');
    table.push_str(&format!(
        "| {:^4} | {:^30} | {:^20} | {:^8} |\n",
        "No", "Destination", "Flight number", "Type"
    ));
    table.push_str(&line);
    table.push('\n');
    for (index, flight) in flights.iter().enumerate() {
        table.push_str(&format!(
            "| {:>4} | {:<30} | {:<20} | {:>8} |\n",
            index + 1,
            flight.destination,
            flight.flight_number,
            flight.aircraft_type_or_empty()
        ));
        table.push_str(&line);
        table.push('\n');
    }
    table
}
