//! Column layout for side-by-side panel display.
//!
//! Pure functions over the stored breakers; the caller recomputes the
//! layout from fresh store data on every display pass, so there is no
//! cached state to invalidate.

use crate::types::Breaker;

/// Largest left/right space difference tolerated before a balance
/// report is attached to the layout.
pub const BALANCE_TOLERANCE: i32 = 2;

/// Which display column a balance report refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// How many more breakers of each width the lighter column could take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceReport {
    /// The column with fewer used spaces.
    pub column: Column,
    /// Spaces still open in that column.
    pub available: i32,
    pub single_pole: i32,
    pub double_pole: i32,
    pub triple_pole: i32,
}

/// Two-column partition of the panel's breakers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub left: Vec<Breaker>,
    pub right: Vec<Breaker>,
    /// Spaces consumed by the left column.
    pub left_used: i32,
    /// Spaces consumed by the right column.
    pub right_used: i32,
    pub balance_delta: i32,
    /// Present when `balance_delta` exceeds [`BALANCE_TOLERANCE`].
    pub balance: Option<BalanceReport>,
}

/// Splits breakers into two display columns.
///
/// Breakers are taken in position order and packed into the left
/// column until its half of the panel is full; the first breaker that
/// does not fit, and every breaker after it, goes right. One forward
/// pass, no repacking: a lopsided split is reported, not repaired,
/// since reordering a few dozen breakers by hand is cheaper than any
/// packing scheme could justify.
///
/// A non-positive `total_spaces` degrades to the whole collection in
/// the right column.
pub fn compute_columns(breakers: &[Breaker], total_spaces: i32) -> PanelLayout {
    let mut ordered = breakers.to_vec();
    // Stable sort: equal positions keep their stored order.
    ordered.sort_by_key(|b| b.position);

    let left_target = total_spaces / 2;

    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut left_used = 0;
    let mut right_used = 0;
    let mut left_full = false;

    for breaker in ordered {
        let width = breaker.space_width();
        if !left_full && left_used + width <= left_target {
            left_used += width;
            left.push(breaker);
        } else {
            left_full = true;
            right_used += width;
            right.push(breaker);
        }
    }

    let balance_delta = (left_used - right_used).abs();
    let balance = balance_report(left_used, right_used, total_spaces);

    if balance.is_some() {
        tracing::debug!(left_used, right_used, balance_delta, "columns out of balance");
    }

    PanelLayout {
        left,
        right,
        left_used,
        right_used,
        balance_delta,
        balance,
    }
}

/// Builds the lighter column's fit counts when the used-space delta
/// exceeds [`BALANCE_TOLERANCE`], `None` otherwise. Standalone so a
/// caller holding only the per-column tallies can produce the same
/// report a full layout would.
pub fn balance_report(
    left_used: i32,
    right_used: i32,
    total_spaces: i32,
) -> Option<BalanceReport> {
    let delta = (left_used - right_used).abs();
    if delta <= BALANCE_TOLERANCE {
        return None;
    }

    let (column, used, heavier_used, target) = if left_used <= right_used {
        (Column::Left, left_used, right_used, total_spaces / 2)
    } else {
        (
            Column::Right,
            right_used,
            left_used,
            total_spaces - total_spaces / 2,
        )
    };

    // Headroom against the column's half of the panel, capped by the
    // spaces the heavier column leaves of the total so an overfull
    // panel is not over-promised.
    let available = (target - used).min(total_spaces - heavier_used).max(0);

    Some(BalanceReport {
        column,
        available,
        single_pole: available,
        double_pole: available / 2,
        triple_pole: available / 3,
    })
}
