use trm_types::Interval;

/// Sort intervals by ascending start, breaking ties by ascending end.
///
/// [`Interval`]'s total order makes the result independent of input order,
/// so an unstable sort is enough.
pub fn order(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_unstable();
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_start() {
        let sorted = order(vec![
            Interval::new(20.0, 30.0),
            Interval::new(0.0, 10.0),
            Interval::new(12.0, 15.0),
        ]);
        let starts: Vec<f64> = sorted.iter().map(Interval::start).collect();
        assert_eq!(starts, vec![0.0, 12.0, 20.0]);
    }

    #[test]
    fn equal_starts_sorted_by_end() {
        let sorted = order(vec![
            Interval::new(5.0, 9.0),
            Interval::new(5.0, 5.0),
            Interval::new(5.0, 7.0),
        ]);
        assert_eq!(
            sorted,
            vec![
                Interval::new(5.0, 5.0),
                Interval::new(5.0, 7.0),
                Interval::new(5.0, 9.0),
            ]
        );
    }

    #[test]
    fn result_independent_of_input_order() {
        let a = vec![
            Interval::new(1.0, 4.0),
            Interval::new(1.0, 2.0),
            Interval::new(-3.0, 0.0),
        ];
        let mut b = a.clone();
        b.reverse();
        assert_eq!(order(a), order(b));
    }

    #[test]
    fn empty_stays_empty() {
        assert!(order(Vec::new()).is_empty());
    }
}
