use trm_types::{Interval, Threshold};

/// Merge an ordered run of intervals in a single forward sweep.
///
/// The next interval joins the current run when its start is at or before
/// the run's end (overlap or touch) or when [`Interval::gap_to`] is below
/// the threshold. A gap exactly equal to the threshold does not merge, while
/// touching always does.
///
/// `ordered` must already be sorted as produced by [`super::order`].
pub fn coalesce(ordered: &[Interval], threshold: Threshold) -> Vec<Interval> {
    debug_assert!(
        ordered.windows(2).all(|w| w[0] <= w[1]),
        "coalesce input must be ordered"
    );
    let Some((first, rest)) = ordered.split_first() else {
        return Vec::new();
    };

    let thr = threshold.value();
    let mut merged = Vec::new();
    let mut current = *first;

    for next in rest {
        if next.start() <= current.end() || current.gap_to(next) < thr {
            if next.end() > current.end() {
                current = Interval::new_unchecked(current.start(), next.end());
            }
        } else {
            merged.push(current);
            current = *next;
        }
    }

    merged.push(current);
    merged
}
