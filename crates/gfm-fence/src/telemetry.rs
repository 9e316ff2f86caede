use crate::circle::MarkerMoveResult;

pub const MARKER_MOVES_TOTAL: &str = "geofence_marker_moves_total";
pub const PLOTS_TOTAL: &str = "geofence_plots_total";
pub const REMOVALS_TOTAL: &str = "geofence_removals_total";

/// Registers descriptions with the installed recorder. Call after the
/// recorder is installed.
pub fn describe_metrics() {
    metrics::describe_counter!(
        MARKER_MOVES_TOTAL,
        "Marker drags handled by a geofence, labelled by result"
    );
    metrics::describe_counter!(PLOTS_TOTAL, "Geofences plotted on a map surface");
    metrics::describe_counter!(REMOVALS_TOTAL, "Geofences removed from a map surface");
}

pub(crate) fn record_move(result: MarkerMoveResult) {
    metrics::counter!(MARKER_MOVES_TOTAL, "result" => result.as_str()).increment(1);
}

pub(crate) fn record_plot() {
    metrics::counter!(PLOTS_TOTAL).increment(1);
}

pub(crate) fn record_removal() {
    metrics::counter!(REMOVALS_TOTAL).increment(1);
}
