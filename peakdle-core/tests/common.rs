use peakdle_core::{Catalog, SessionEvent, SessionEventHandler};
use peakdle_persistence::DailyPlays;
use peakdle_types::{AttributeValue, Entity, Guess, ModeKey, Outcome};
use std::sync::{Arc, Mutex};

/// Builds an edibles-shaped entity: hunger, weight, stamina, status
/// effects, locations.
pub fn edible(name: &str, hunger: f64, weight: f64, stamina: f64) -> Entity {
    Entity {
        name: name.to_string(),
        attributes: vec![
            AttributeValue::Number(hunger),
            AttributeValue::Number(weight),
            AttributeValue::Number(stamina),
            AttributeValue::Tags(Vec::new()),
            AttributeValue::Tags(Vec::new()),
        ],
        image: None,
        rewards: Vec::new(),
    }
}

/// Ten-entity test catalog with a spread of stats.
pub fn edible_catalog() -> Catalog {
    Catalog::new(
        (0..10)
            .map(|i| {
                edible(
                    &format!("Edible {i:02}"),
                    f64::from(i) * 10.0,
                    f64::from(i) * 0.5,
                    100.0 - f64::from(i) * 10.0,
                )
            })
            .collect(),
    )
}

/// Badge-shaped entity: identity only, with cosmetic rewards behind it.
pub fn badge(name: &str, rewards: Vec<&str>) -> Entity {
    Entity {
        name: name.to_string(),
        attributes: Vec::new(),
        image: Some(format!("/badges/{}.png", name.to_lowercase().replace(' ', "-"))),
        rewards: rewards.into_iter().map(str::to_string).collect(),
    }
}

pub fn badge_catalog() -> Catalog {
    Catalog::new(
        (0..8)
            .map(|i| {
                badge(
                    &format!("Badge {i:02}"),
                    vec!["Scout Cap", "Scout Scarf"],
                )
            })
            .collect(),
    )
}

/// Event collector for asserting session event emissions.
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<SessionEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SessionEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count_matching(&self, check: impl Fn(&SessionEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| check(e)).count()
    }
}

impl SessionEventHandler for EventCollector {
    fn handle_event(&mut self, event: SessionEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Store wrapper that counts and captures `mark_as_played` calls so tests
/// can assert the write-once contract.
pub struct CountingStore<S: DailyPlays> {
    inner: S,
    log: Arc<Mutex<Vec<(ModeKey, Outcome, usize, usize)>>>,
}

impl<S: DailyPlays> CountingStore<S> {
    pub fn new(inner: S) -> (Self, Arc<Mutex<Vec<(ModeKey, Outcome, usize, usize)>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                inner,
                log: log.clone(),
            },
            log,
        )
    }
}

impl<S: DailyPlays> DailyPlays for CountingStore<S> {
    fn has_played_today(&self, mode: &ModeKey) -> bool {
        self.inner.has_played_today(mode)
    }

    fn result_today(&self, mode: &ModeKey) -> Outcome {
        self.inner.result_today(mode)
    }

    fn primary_guesses_today(&self, mode: &ModeKey) -> Vec<Guess> {
        self.inner.primary_guesses_today(mode)
    }

    fn secondary_guesses_today(&self, mode: &ModeKey) -> Vec<String> {
        self.inner.secondary_guesses_today(mode)
    }

    fn mark_as_played(
        &mut self,
        mode: &ModeKey,
        result: &Outcome,
        primary: &[Guess],
        secondary: &[String],
    ) -> anyhow::Result<()> {
        self.log.lock().unwrap().push((
            mode.clone(),
            result.clone(),
            primary.len(),
            secondary.len(),
        ));
        self.inner.mark_as_played(mode, result, primary, secondary)
    }
}
