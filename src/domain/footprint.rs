// Carbon footprint domain model
use serde::Serialize;

/// Emissions estimate for one billing period plus tracked travel. Derived on
/// every request and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintReport {
    pub electricity_co2_kg: f64,
    pub fuel_litres: f64,
    pub transport_co2_kg: f64,
    pub total_co2_kg: f64,
    pub credits: f64,
}
