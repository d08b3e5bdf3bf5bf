use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::interval::Interval;

/// Which raw shapes [`RawEntry::parse`] accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizePolicy {
    /// Accept strings holding a finite decimal number (surrounding
    /// whitespace ignored) as bounds.
    pub numeric_strings: bool,
    /// Accept entries longer than two elements, reading only the first two.
    pub trailing_elements: bool,
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self {
            numeric_strings: true,
            trailing_elements: false,
        }
    }
}

impl SanitizePolicy {
    /// Only exact two-element arrays of JSON numbers.
    pub fn strict() -> Self {
        Self {
            numeric_strings: false,
            trailing_elements: false,
        }
    }

    /// Numeric strings and over-long arrays are both accepted.
    pub fn lenient() -> Self {
        Self {
            numeric_strings: true,
            trailing_elements: true,
        }
    }
}

/// Why a raw entry was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Not an array, or an array of the wrong length.
    NotAPair,
    /// A bound is missing a numeric interpretation or is not finite.
    NotNumeric,
}

/// A single loosely-typed input entry awaiting coercion.
#[derive(Clone, Copy, Debug)]
pub struct RawEntry<'a>(&'a Value);

impl<'a> RawEntry<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self(value)
    }

    /// Coerce this entry into an [`Interval`] under `policy`.
    ///
    /// A reversed pair is swapped. The error is a classification for
    /// bookkeeping, not a failure to report to anyone.
    pub fn parse(&self, policy: &SanitizePolicy) -> Result<Interval, Rejection> {
        let items = self.0.as_array().ok_or(Rejection::NotAPair)?;
        let pair_ok = match items.len() {
            2 => true,
            n => n > 2 && policy.trailing_elements,
        };
        if !pair_ok {
            return Err(Rejection::NotAPair);
        }

        let a = coerce_bound(&items[0], policy).ok_or(Rejection::NotNumeric)?;
        let b = coerce_bound(&items[1], policy).ok_or(Rejection::NotNumeric)?;
        Interval::try_new(a, b).map_err(|_| Rejection::NotNumeric)
    }
}

/// Interpret one bound as a finite number.
fn coerce_bound(value: &Value, policy: &SanitizePolicy) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) if policy.numeric_strings => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    n.is_finite().then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Result<Interval, Rejection> {
        RawEntry::new(&value).parse(&SanitizePolicy::default())
    }

    #[test]
    fn numeric_pair_parses() {
        assert_eq!(parse(json!([0, 10])).unwrap(), Interval::new(0.0, 10.0));
        assert_eq!(parse(json!([1.5, 2.5])).unwrap(), Interval::new(1.5, 2.5));
    }

    #[test]
    fn reversed_pair_is_swapped() {
        assert_eq!(parse(json!([10, 5])).unwrap(), Interval::new(5.0, 10.0));
    }

    #[test]
    fn non_array_is_not_a_pair() {
        assert_eq!(parse(Value::Null), Err(Rejection::NotAPair));
        assert_eq!(parse(json!("abc")), Err(Rejection::NotAPair));
        assert_eq!(parse(json!(42)), Err(Rejection::NotAPair));
        assert_eq!(parse(json!({"start": 0, "end": 1})), Err(Rejection::NotAPair));
    }

    #[test]
    fn wrong_arity_is_not_a_pair() {
        assert_eq!(parse(json!([])), Err(Rejection::NotAPair));
        assert_eq!(parse(json!([1])), Err(Rejection::NotAPair));
        assert_eq!(parse(json!([1, 2, 3])), Err(Rejection::NotAPair));
    }

    #[test]
    fn trailing_elements_allowed_when_lenient() {
        let value = json!([3, 1, "ignored"]);
        let iv = RawEntry::new(&value).parse(&SanitizePolicy::lenient()).unwrap();
        assert_eq!(iv, Interval::new(1.0, 3.0));
    }

    #[test]
    fn lenient_still_requires_two_elements() {
        let value = json!([3]);
        assert_eq!(
            RawEntry::new(&value).parse(&SanitizePolicy::lenient()),
            Err(Rejection::NotAPair)
        );
    }

    #[test]
    fn non_numeric_bounds_rejected() {
        assert_eq!(parse(json!(["a", 1])), Err(Rejection::NotNumeric));
        assert_eq!(parse(json!([null, 1])), Err(Rejection::NotNumeric));
        assert_eq!(parse(json!([0, true])), Err(Rejection::NotNumeric));
        assert_eq!(parse(json!([[0], 1])), Err(Rejection::NotNumeric));
        assert_eq!(parse(json!(["", 1])), Err(Rejection::NotNumeric));
        assert_eq!(parse(json!(["   ", 1])), Err(Rejection::NotNumeric));
    }

    #[test]
    fn non_finite_strings_rejected() {
        assert_eq!(parse(json!(["Infinity", 1])), Err(Rejection::NotNumeric));
        assert_eq!(parse(json!(["inf", 1])), Err(Rejection::NotNumeric));
        assert_eq!(parse(json!([0, "NaN"])), Err(Rejection::NotNumeric));
    }

    #[test]
    fn numeric_strings_coerced() {
        assert_eq!(parse(json!([" 12 ", "20"])).unwrap(), Interval::new(12.0, 20.0));
        assert_eq!(parse(json!(["1e3", 0])).unwrap(), Interval::new(0.0, 1000.0));
    }

    #[test]
    fn strict_policy_rejects_numeric_strings() {
        let value = json!(["12", 20]);
        assert_eq!(
            RawEntry::new(&value).parse(&SanitizePolicy::strict()),
            Err(Rejection::NotNumeric)
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn leaf() -> impl Strategy<Value = Value> {
            prop_oneof![
                Just(Value::Null),
                any::<bool>().prop_map(Value::Bool),
                any::<i64>().prop_map(Value::from),
                any::<f64>().prop_map(|f| {
                    serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number)
                }),
                "\\PC{0,8}".prop_map(Value::String),
                prop_oneof![
                    Just(" 12 "),
                    Just("-0"),
                    Just("1e400"),
                    Just("Infinity"),
                    Just("NaN"),
                    Just(""),
                ]
                .prop_map(|s| Value::String(s.to_string())),
            ]
        }

        fn any_value() -> impl Strategy<Value = Value> {
            leaf().prop_recursive(3, 32, 4, |inner| {
                prop_oneof![
                    prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                    prop::collection::btree_map("[a-z]{0,4}", inner, 0..4)
                        .prop_map(|m| Value::Object(m.into_iter().collect())),
                ]
            })
        }

        fn any_policy() -> impl Strategy<Value = SanitizePolicy> {
            (any::<bool>(), any::<bool>()).prop_map(|(numeric_strings, trailing_elements)| {
                SanitizePolicy {
                    numeric_strings,
                    trailing_elements,
                }
            })
        }

        proptest! {
            #[test]
            fn parse_only_yields_well_formed_intervals(value in any_value(), policy in any_policy()) {
                if let Ok(iv) = RawEntry::new(&value).parse(&policy) {
                    prop_assert!(value.is_array());
                    prop_assert!(iv.start().is_finite());
                    prop_assert!(iv.end().is_finite());
                    prop_assert!(iv.start() <= iv.end());
                }
            }

            #[test]
            fn parse_ignores_bound_order(a in leaf(), b in leaf(), policy in any_policy()) {
                let forward = Value::Array(vec![a.clone(), b.clone()]);
                let reversed = Value::Array(vec![b, a]);
                prop_assert_eq!(
                    RawEntry::new(&forward).parse(&policy),
                    RawEntry::new(&reversed).parse(&policy)
                );
            }
        }
    }

    #[test]
    fn policy_deserializes_with_defaults() {
        let policy: SanitizePolicy = serde_json::from_str(r#"{"trailing_elements": true}"#).unwrap();
        assert!(policy.numeric_strings);
        assert!(policy.trailing_elements);
    }
}
