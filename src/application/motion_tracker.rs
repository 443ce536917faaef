// Motion tracker - Classify transport mode per fix and accumulate distance
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::geo::distance_km;
use crate::domain::motion::{LocationFix, MotionSession, TransportMode};
use futures::{pin_mut, Stream, StreamExt};

/// Advance `session` by one fix and return the mode inferred for it.
///
/// Each fix is classified on its own speed; there is no smoothing across
/// fixes. A rejected fix leaves the session untouched.
pub fn on_fix(session: &mut MotionSession, fix: LocationFix) -> CoreResult<TransportMode> {
    let Some(coordinate) = fix.coordinate else {
        return Err(CoreError::InvalidFix("fix has no coordinate".to_string()));
    };

    let speed = fix.speed.unwrap_or(0.0);
    if !speed.is_finite() || speed < 0.0 {
        return Err(CoreError::InvalidFix(format!("speed {} is not a non-negative number", speed)));
    }

    let mode = TransportMode::classify(speed);

    // The connecting segment is credited to the mode of the fix that closes
    // it, even when the previous fix was classified differently.
    if let Some(previous) = session.previous_fix.as_ref().and_then(|f| f.coordinate) {
        session.distance_by_mode.add(mode, distance_km(previous, coordinate));
    }

    session.previous_fix = Some(fix);
    session.mode = mode;
    session.fix_count += 1;

    Ok(mode)
}

/// Drive a session from a live fix stream until the producer stops.
/// Returns the number of fixes that were accepted.
pub async fn track_stream<S>(session: &mut MotionSession, fixes: S) -> u64
where
    S: Stream<Item = LocationFix>,
{
    pin_mut!(fixes);

    let mut accepted = 0;
    while let Some(fix) = fixes.next().await {
        match on_fix(session, fix) {
            Ok(mode) => {
                accepted += 1;
                tracing::trace!("Fix accepted, mode={:?}", mode);
            }
            Err(e) => tracing::warn!("Rejected fix: {}", e),
        }
    }

    tracing::debug!(
        "Fix stream ended: {} accepted, {:.3} km total",
        accepted,
        session.total_distance_km()
    );
    accepted
}
