//! Wait-time estimation and crowd-color derivation.
//!
//! Both computations are integer-only. The wait estimate models table
//! turnover as a batch process: every `avg_dining_minutes`, `table_count`
//! parties clear at once, so a party with `n` parties ahead waits roughly
//! `n * avg / tables` minutes, rounded down.
//!
//! The crowd color compares the waiting-line length against the
//! restaurant's table count: a line at 70% of capacity is `yellow`, at 90%
//! it is `red`. The comparison cross-multiplies instead of dividing so no
//! floats (and no float comparisons) are involved.

use waitline_types::{CrowdColor, ServiceMetrics};

/// Waiting parties per 100 tables at which the map marker turns red.
const RED_THRESHOLD_PCT: u64 = 90;
/// Waiting parties per 100 tables at which the map marker turns yellow.
const YELLOW_THRESHOLD_PCT: u64 = 70;

/// Estimated wait in whole minutes for a party with `parties_ahead`
/// parties before it.
///
/// A `table_count` of zero yields 0: with no tables there is no turnover
/// to extrapolate from, and the misconfiguration is better surfaced by the
/// seat map than by a division panic.
pub fn wait_minutes(parties_ahead: u32, metrics: ServiceMetrics) -> u32 {
    let total = u64::from(parties_ahead).saturating_mul(u64::from(metrics.avg_dining_minutes));
    let minutes = total.checked_div(u64::from(metrics.table_count)).unwrap_or(0);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Traffic-light crowding indicator for a waiting line of `waiting`
/// parties at a restaurant running `table_count` tables.
pub fn crowd_color(waiting: u32, table_count: u32) -> CrowdColor {
    if waiting == 0 {
        return CrowdColor::Green;
    }
    let scaled = u64::from(waiting).saturating_mul(100);
    let tables = u64::from(table_count);
    if scaled >= tables.saturating_mul(RED_THRESHOLD_PCT) {
        CrowdColor::Red
    } else if scaled >= tables.saturating_mul(YELLOW_THRESHOLD_PCT) {
        CrowdColor::Yellow
    } else {
        CrowdColor::Green
    }
}
