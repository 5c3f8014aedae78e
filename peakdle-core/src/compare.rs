use peakdle_types::{AttributeKind, AttributeValue, Comparison, DirectionStyle, MatchClass};
use std::collections::HashSet;

/// Classifies a guessed attribute value against the target value for the
/// declared kind. Pure and total: any well-typed pair classifies, and a
/// kind/value mismatch degrades to incorrect instead of panicking. Identical
/// values classify as correct under every kind.
pub fn classify(guess: &AttributeValue, target: &AttributeValue, kind: &AttributeKind) -> Comparison {
    match kind {
        AttributeKind::Exact => classify_exact(guess, target),
        AttributeKind::Numeric {
            tolerance,
            direction,
        } => classify_numeric(guess, target, *tolerance, *direction),
        AttributeKind::TagSet => classify_tags(guess, target),
    }
}

fn classify_exact(guess: &AttributeValue, target: &AttributeValue) -> Comparison {
    if guess == target {
        Comparison::correct()
    } else {
        Comparison::incorrect()
    }
}

fn classify_numeric(
    guess: &AttributeValue,
    target: &AttributeValue,
    tolerance: f64,
    direction: DirectionStyle,
) -> Comparison {
    if guess == target {
        return Comparison::correct();
    }
    let (Some(guessed), Some(expected)) = (guess.as_number(), target.as_number()) else {
        return Comparison::incorrect();
    };

    let diff = guessed - expected;
    let hint = direction.hint(diff > 0.0);
    if diff.abs() <= tolerance {
        Comparison::with_hint(MatchClass::Partial, hint)
    } else {
        Comparison::with_hint(MatchClass::Incorrect, hint)
    }
}

fn classify_tags(guess: &AttributeValue, target: &AttributeValue) -> Comparison {
    if guess == target {
        return Comparison::correct();
    }
    let (Some(guessed), Some(expected)) = (guess.as_tags(), target.as_tags()) else {
        return Comparison::incorrect();
    };

    // Order within a tag set is irrelevant.
    let guessed: HashSet<&str> = guessed.iter().map(String::as_str).collect();
    let expected: HashSet<&str> = expected.iter().map(String::as_str).collect();

    if guessed.is_empty() && expected.is_empty() {
        return Comparison::correct();
    }
    if guessed == expected {
        return Comparison::correct();
    }

    let overlap = guessed.intersection(&expected).count();
    if overlap > 0 {
        Comparison::with_hint(MatchClass::Partial, format!("{overlap} correct"))
    } else {
        Comparison::incorrect()
    }
}
