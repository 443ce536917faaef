// Footprint calculator - Electricity and travel emissions with credit value
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::footprint::FootprintReport;
use crate::domain::motion::DistanceByMode;
use crate::domain::policy::POLICY;

pub fn compute(electricity_bill: f64, distances: &DistanceByMode) -> CoreResult<FootprintReport> {
    if !electricity_bill.is_finite() || electricity_bill < 0.0 {
        return Err(CoreError::InvalidInput(format!(
            "electricity bill must be a non-negative number, got {}",
            electricity_bill
        )));
    }

    let mut fuel_litres = 0.0;
    for (mode, km) in distances.iter() {
        if !km.is_finite() || km < 0.0 {
            return Err(CoreError::InvalidInput(format!(
                "distance for {:?} must be a non-negative number, got {}",
                mode, km
            )));
        }
        if let Some(efficiency) = mode.fuel_efficiency() {
            fuel_litres += km / efficiency;
        }
    }

    let electricity_co2_kg = electricity_bill * POLICY.electricity_co2_factor;
    let transport_co2_kg = fuel_litres * POLICY.fuel_co2_factor;
    let total_co2_kg = electricity_co2_kg + transport_co2_kg;

    Ok(FootprintReport {
        electricity_co2_kg,
        fuel_litres,
        transport_co2_kg,
        total_co2_kg,
        credits: total_co2_kg / POLICY.kg_co2_per_credit,
    })
}

/// Parse a bill amount typed into a form field.
pub fn parse_bill(text: &str) -> CoreResult<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CoreError::InvalidInput(format!("electricity bill '{}' is not a number", text)))
}
