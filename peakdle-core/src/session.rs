use crate::{
    Catalog, ModeSpec, OutcomeStyle, ScoringEngine, SessionEvent, SessionEventBus,
    ms_until_next_local_midnight, select_index,
};
use chrono::Local;
use peakdle_persistence::DailyPlays;
use peakdle_types::{Entity, GameError, Guess, Outcome, ResultRow};
use tracing::{debug, info, warn};

/// Where a session sits in its lifetime. Loading happens inside the
/// constructor; a terminal session behaves like a resolved one for the rest
/// of the page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting guesses.
    Active,
    /// Today's stored record was replayed; no new guesses.
    Resolved,
    Terminal(TerminalOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalOutcome {
    Won,
    Lost,
}

/// Which half of a two-phase mode is live. Single-phase modes stay in
/// `Primary` for their whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Primary,
    Secondary {
        /// Reward names confirmed so far; the win condition is covering the
        /// target's full reward set, not any single guess.
        accepted: Vec<String>,
    },
}

/// Per-mode orchestrator for one page view. Picks today's target, replays a
/// finished day from the store, scores live guesses, and writes the daily
/// record exactly once on reaching a terminal state. Switching category or
/// tier means dropping the session and constructing a new one under the new
/// mode key.
pub struct PuzzleSession<S: DailyPlays> {
    spec: ModeSpec,
    catalog: Catalog,
    target: Entity,
    guesses: Vec<Guess>,
    secondary_guesses: Vec<String>,
    phase: Phase,
    state: SessionState,
    outcome: Outcome,
    store: S,
    events: SessionEventBus,
    recorded: bool,
}

impl<S: DailyPlays> PuzzleSession<S> {
    pub fn new(
        spec: ModeSpec,
        catalog: Catalog,
        store: S,
        events: SessionEventBus,
    ) -> Result<Self, GameError> {
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog(spec.key.storage_key()));
        }

        let today = Local::now().date_naive();
        let index = select_index(today, &spec.key.storage_key(), catalog.len());
        let target = catalog.entities()[index].clone();

        let mut session = Self {
            spec,
            catalog,
            target,
            guesses: Vec::new(),
            secondary_guesses: Vec::new(),
            phase: Phase::Primary,
            state: SessionState::Active,
            outcome: Outcome::Unresolved,
            store,
            events,
            recorded: false,
        };

        let resumed = session.store.has_played_today(&session.spec.key);
        if resumed {
            session.guesses = session.store.primary_guesses_today(&session.spec.key);
            session.secondary_guesses = session.store.secondary_guesses_today(&session.spec.key);
            session.outcome = session.store.result_today(&session.spec.key);
            session.state = SessionState::Resolved;
            session.recorded = true;
            info!(mode = %session.spec.key, "resumed finished daily session");
        }
        session.events.publish(SessionEvent::SessionStarted {
            mode: session.spec.key.clone(),
            resumed,
        });

        Ok(session)
    }

    /// Submit a primary-phase guess by entity name. Input errors (unknown
    /// name, repeat guess, session not accepting) are rejected silently with
    /// `None`; an accepted guess returns its scored row.
    pub fn submit_guess(&mut self, name: &str) -> Option<ResultRow> {
        if self.state != SessionState::Active || self.phase != Phase::Primary {
            debug!(mode = %self.spec.key, "guess ignored: session not accepting primary guesses");
            return None;
        }
        let Some(entity) = self.catalog.find(name).cloned() else {
            debug!(mode = %self.spec.key, name, "guess ignored: not in catalog");
            return None;
        };
        if self
            .guesses
            .iter()
            .any(|guess| guess.entity.matches_name(&entity.name))
        {
            debug!(mode = %self.spec.key, name = %entity.name, "guess ignored: already guessed");
            return None;
        }

        let row = ScoringEngine::score_guess(&entity, &self.target, &self.spec.schema);
        let winning = ScoringEngine::is_win(&entity, &self.target);
        self.guesses.push(Guess::new(entity.clone()));
        self.events.publish(SessionEvent::GuessScored {
            mode: self.spec.key.clone(),
            entity: entity.name.clone(),
            winning,
        });

        if winning {
            if self.spec.two_phase && !self.target.rewards.is_empty() {
                self.phase = Phase::Secondary {
                    accepted: Vec::new(),
                };
                self.events.publish(SessionEvent::PhaseAdvanced {
                    mode: self.spec.key.clone(),
                });
            } else {
                self.finish(TerminalOutcome::Won);
            }
        } else if self.guesses.len() >= self.spec.max_guesses {
            self.finish(TerminalOutcome::Lost);
        }

        Some(row)
    }

    /// Submit a secondary-phase reward guess. Returns `Some(true)` when the
    /// reward belongs to the target set, `Some(false)` when it does not
    /// (which ends the phase), and `None` when the guess is ignored.
    pub fn submit_reward_guess(&mut self, reward: &str) -> Option<bool> {
        if self.state != SessionState::Active {
            return None;
        }
        let Phase::Secondary { accepted } = &self.phase else {
            debug!(mode = %self.spec.key, "reward guess ignored: primary phase still open");
            return None;
        };
        let reward = reward.trim();
        if reward.is_empty()
            || self
                .secondary_guesses
                .iter()
                .any(|seen| seen.eq_ignore_ascii_case(reward))
        {
            return None;
        }

        self.secondary_guesses.push(reward.to_string());
        let hit = self
            .target
            .rewards
            .iter()
            .find(|name| name.eq_ignore_ascii_case(reward))
            .cloned();

        match hit {
            Some(name) => {
                let mut accepted = accepted.clone();
                if !accepted.iter().any(|a| a.eq_ignore_ascii_case(&name)) {
                    accepted.push(name);
                }
                // Cumulative win condition: the union of accepted rewards
                // must cover the target's full reward set.
                let covered = self
                    .target
                    .rewards
                    .iter()
                    .all(|r| accepted.iter().any(|a| a.eq_ignore_ascii_case(r)));
                self.phase = Phase::Secondary { accepted };
                if covered {
                    self.finish(TerminalOutcome::Won);
                }
                Some(true)
            }
            None => {
                self.finish(TerminalOutcome::Lost);
                Some(false)
            }
        }
    }

    fn finish(&mut self, terminal: TerminalOutcome) {
        self.outcome = match self.spec.outcome_style {
            OutcomeStyle::WinLose => match terminal {
                TerminalOutcome::Won => Outcome::Won,
                TerminalOutcome::Lost => Outcome::Lost,
            },
            OutcomeStyle::GuessCount => Outcome::GuessCount(self.guesses.len() as u32),
        };
        self.state = SessionState::Terminal(terminal);

        match terminal {
            TerminalOutcome::Won => {
                info!(mode = %self.spec.key, guesses = self.guesses.len(), "daily puzzle solved");
                self.events.publish(SessionEvent::SessionWon {
                    mode: self.spec.key.clone(),
                    guesses: self.guesses.len(),
                });
            }
            TerminalOutcome::Lost => {
                info!(mode = %self.spec.key, target = %self.target.name, "daily puzzle failed");
                self.events.publish(SessionEvent::SessionLost {
                    mode: self.spec.key.clone(),
                    target: self.target.name.clone(),
                });
            }
        }

        if !self.recorded {
            self.recorded = true;
            if let Err(err) = self.store.mark_as_played(
                &self.spec.key,
                &self.outcome,
                &self.guesses,
                &self.secondary_guesses,
            ) {
                // Degraded but not fatal: the outcome still displays for
                // this page view, it just will not survive a reload.
                warn!(mode = %self.spec.key, "failed to persist daily record: {err:#}");
            }
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn accepts_guesses(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn target(&self) -> &Entity {
        &self.target
    }

    pub fn guesses(&self) -> &[Guess] {
        &self.guesses
    }

    pub fn secondary_guesses(&self) -> &[String] {
        &self.secondary_guesses
    }

    /// Scored rows for every guess so far, in submission order. Works for
    /// live and replayed sessions alike since guesses are full snapshots.
    pub fn rows(&self) -> Vec<ResultRow> {
        ScoringEngine::score_all(&self.guesses, &self.target, &self.spec.schema)
    }

    pub fn share_grid(&self) -> Vec<Vec<peakdle_types::MatchClass>> {
        ScoringEngine::share_grid(&self.rows())
    }

    /// Entities still selectable this session.
    pub fn remaining_pool(&self) -> Vec<&Entity> {
        self.catalog.remaining(&self.guesses)
    }

    /// Countdown value for the external display.
    pub fn ms_until_reset(&self) -> i64 {
        ms_until_next_local_midnight(Local::now())
    }
}
