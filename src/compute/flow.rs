//! Per-cell transfer rules for one simulation tick.
//!
//! Everything here is pure: the rules see only pre-tick fill values and
//! return the amounts leaving a focus cell. The engine accumulates these
//! outflows into a delta buffer and applies them in a single pass, so no
//! cell's updated value ever feeds another cell's transfer within the
//! same tick.

use crate::schema::FlowConfig;

/// Amounts leaving a focus cell in one tick, by direction.
///
/// Each field is non-negative and the four together never exceed the
/// focus cell's pre-tick fill.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Outflow {
    pub down: f32,
    pub left: f32,
    pub right: f32,
    pub up: f32,
}

impl Outflow {
    /// Total fill leaving the focus cell.
    #[inline]
    pub fn total(&self) -> f32 {
        self.down + self.left + self.right + self.up
    }
}

/// Fill a cell below can still absorb before reaching `max_fill_level`.
///
/// Negative when the cell below is already compressed past capacity.
#[inline]
pub fn capacity(below_fill: f32, max_fill_level: f32) -> f32 {
    max_fill_level - below_fill
}

/// Gravity transfer into the cell below.
///
/// Moves as much of the focus fill as the cell below can absorb. Zero
/// when the cell below is at or over capacity; back-pressure then leaves
/// the full fill to the horizontal rule.
#[inline]
pub fn downward_transfer(fill: f32, below_fill: f32, max_fill_level: f32) -> f32 {
    fill.min(capacity(below_fill, max_fill_level).max(0.0))
}

/// Dispersion offer toward one horizontal neighbor.
///
/// A fixed fraction of the remaining focus fill, granted only when the
/// neighbor sits strictly lower. The offer is additionally capped at
/// half the level difference: a transfer may equalize the two cells but
/// never invert their order, so fluid cannot flow uphill and a pair of
/// cells cannot trade the same offer back and forth tick after tick.
#[inline]
pub fn horizontal_offer(remaining: f32, neighbor_fill: f32, dispersion: f32) -> f32 {
    if neighbor_fill < remaining {
        (remaining * dispersion).min((remaining - neighbor_fill) * 0.5)
    } else {
        0.0
    }
}

/// Compute the outflow of one focus cell from its pre-tick neighborhood.
///
/// Neighbor fills are `None` for walls and for the grid edge; both are
/// ineligible to send or receive. Rules, in order:
///
/// 1. gravity into the cell below, bounded by its remaining capacity
/// 2. dispersion of the remainder toward strictly lower left/right
///    neighbors, each offer gated independently against the same value
/// 3. optional upward push of compression excess (fill above 1.0) when
///    the downward path is blocked
pub fn cell_outflow(
    fill: f32,
    below: Option<f32>,
    left: Option<f32>,
    right: Option<f32>,
    above: Option<f32>,
    config: &FlowConfig,
) -> Outflow {
    let mut out = Outflow::default();
    if fill <= 0.0 {
        return out;
    }

    // 1. Gravity.
    let down_blocked = match below {
        Some(below_fill) => {
            out.down = downward_transfer(fill, below_fill, config.max_fill_level);
            out.down <= 0.0
        }
        None => true,
    };

    // 2. Horizontal dispersion of what gravity left behind. Both offers
    // are measured against the same remainder; with dispersion <= 0.5
    // they cannot overdraw the cell.
    let remaining = fill - out.down;
    if remaining > 0.0 {
        if let Some(left_fill) = left {
            out.left = horizontal_offer(remaining, left_fill, config.dispersion);
        }
        if let Some(right_fill) = right {
            out.right = horizontal_offer(remaining, right_fill, config.dispersion);
        }
    }

    // 3. Upward push of compression excess, only when the cell cannot
    // drain downward and still holds more than a nominal cell's worth.
    if config.upward_push && down_blocked {
        let rest = remaining - out.left - out.right;
        if rest > 1.0 {
            if let Some(above_fill) = above {
                if above_fill < rest {
                    out.up = rest - 1.0;
                }
            }
        }
    }

    out
}
