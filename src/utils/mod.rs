pub mod coerce;
pub mod json_body;
