use crate::classify;
use peakdle_types::{
    AttributeResult, AttributeSpec, AttributeValue, Comparison, Entity, Guess, MatchClass,
    ResultRow,
};

pub struct ScoringEngine;

impl ScoringEngine {
    /// Score one guessed entity against the target. The identity comparison
    /// comes first (it is the win condition), then one cell per schema
    /// column in schema order.
    pub fn score_guess(guess: &Entity, target: &Entity, schema: &[AttributeSpec]) -> ResultRow {
        let mut cells = Vec::with_capacity(schema.len() + 1);

        cells.push(AttributeResult {
            attribute: "Name".to_string(),
            value: AttributeValue::Text(guess.name.clone()),
            comparison: if Self::is_win(guess, target) {
                Comparison::correct()
            } else {
                Comparison::incorrect()
            },
        });

        for (column, spec) in schema.iter().enumerate() {
            let guessed = guess.attributes.get(column);
            let expected = target.attributes.get(column);
            let comparison = match (guessed, expected) {
                (Some(g), Some(t)) => classify(g, t, &spec.kind),
                // Catalog data short a column; stay total.
                _ => Comparison::incorrect(),
            };
            cells.push(AttributeResult {
                attribute: spec.name.clone(),
                value: guessed
                    .cloned()
                    .unwrap_or_else(|| AttributeValue::Text(String::new())),
                comparison,
            });
        }

        ResultRow {
            entity: guess.name.clone(),
            cells,
        }
    }

    /// One row per guess, preserving submission order.
    pub fn score_all(guesses: &[Guess], target: &Entity, schema: &[AttributeSpec]) -> Vec<ResultRow> {
        guesses
            .iter()
            .map(|guess| Self::score_guess(&guess.entity, target, schema))
            .collect()
    }

    pub fn is_win(guess: &Entity, target: &Entity) -> bool {
        guess.matches_name(&target.name)
    }

    /// Classification matrix for external share-text rendering.
    pub fn share_grid(rows: &[ResultRow]) -> Vec<Vec<MatchClass>> {
        rows.iter()
            .map(|row| row.cells.iter().map(|cell| cell.comparison.class).collect())
            .collect()
    }
}
