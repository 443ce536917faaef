// Fixed policy constants shared by the matching, tracking and footprint code

/// Every tunable number the core depends on. The values reproduce the
/// behaviour of the deployed app and are not read from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub earth_radius_km: f64,
    /// Speeds at or above this are no longer walking.
    pub two_wheeler_min_speed: f64,
    /// Speeds at or above this are classified as a car.
    pub four_wheeler_min_speed: f64,
    /// km per litre
    pub two_wheeler_efficiency: f64,
    /// km per litre
    pub four_wheeler_efficiency: f64,
    /// kg CO2 per unit of electricity bill
    pub electricity_co2_factor: f64,
    /// kg CO2 per litre of fuel burnt
    pub fuel_co2_factor: f64,
    /// kg CO2 per carbon credit
    pub kg_co2_per_credit: f64,
    /// Readings strictly above this are unsafe.
    pub unsafe_aqi_threshold: i32,
    pub history_window: usize,
    /// Entries shown in the recent food log
    pub food_log_window: usize,
    pub default_nearest_k: usize,
}

pub const POLICY: Policy = Policy {
    earth_radius_km: 6371.0,
    two_wheeler_min_speed: 2.0,
    four_wheeler_min_speed: 15.0,
    two_wheeler_efficiency: 40.0,
    four_wheeler_efficiency: 15.0,
    electricity_co2_factor: 0.82,
    fuel_co2_factor: 2.3,
    kg_co2_per_credit: 1000.0,
    unsafe_aqi_threshold: 100,
    history_window: 10,
    food_log_window: 5,
    default_nearest_k: 5,
};
