//! `random` / `rand` builtin

use topiclab_domain::{Modifier, RangeSpec};

use crate::ports::RandomSource;

/// Draws an integer from the first range modifier, or `default_range`.
///
/// Inverted bounds are swapped rather than rejected.
pub fn resolve(random: &dyn RandomSource, modifiers: &[Modifier], default_range: RangeSpec) -> String {
    let range = modifiers
        .iter()
        .find_map(|modifier| match modifier {
            Modifier::Range(range) => Some(*range),
            _ => None,
        })
        .unwrap_or(default_range);

    let (low, high) = if range.min <= range.max {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };

    random.range_inclusive(low, high).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::test_support::SequenceRandom;
    use pretty_assertions::assert_eq;

    const DEFAULT: RangeSpec = RangeSpec::new(0, 100);

    fn draw(random: &SequenceRandom, tokens: &[&str]) -> u64 {
        let modifiers: Vec<Modifier> = tokens.iter().map(|t| Modifier::parse(t)).collect();
        resolve(random, &modifiers, DEFAULT).parse().unwrap()
    }

    #[test]
    fn test_default_range() {
        let random = SequenceRandom::new();
        for _ in 0..200 {
            assert!(draw(&random, &[]) <= 100);
        }
    }

    #[test]
    fn test_custom_range() {
        let random = SequenceRandom::new();
        for _ in 0..200 {
            let value = draw(&random, &["1-10"]);
            assert!((1..=10).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn test_first_range_wins() {
        let random = SequenceRandom::new();
        for _ in 0..50 {
            let value = draw(&random, &["utc", "5-5", "1-1000"]);
            assert_eq!(value, 5);
        }
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        let random = SequenceRandom::new();
        for _ in 0..50 {
            let value = draw(&random, &["10-1"]);
            assert!((1..=10).contains(&value));
        }
    }

    #[test]
    fn test_degenerate_range() {
        let random = SequenceRandom::new();
        assert_eq!(draw(&random, &["7-7"]), 7);
    }

    #[test]
    fn test_full_width_range_does_not_panic() {
        let random = SequenceRandom::new();
        let max = u64::MAX.to_string();
        let token = format!("0-{max}");
        let _ = draw(&random, &[token.as_str()]);
    }

    #[test]
    fn test_ignores_other_modifiers() {
        let random = SequenceRandom::new();
        for _ in 0..50 {
            assert!(draw(&random, &["+1h", "junk"]) <= 100);
        }
    }
}
