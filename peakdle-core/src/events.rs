use peakdle_types::ModeKey;

/// Notifications the session publishes for the UI layer.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    SessionStarted {
        mode: ModeKey,
        /// True when today's stored record was replayed instead of opening a
        /// fresh game.
        resumed: bool,
    },
    GuessScored {
        mode: ModeKey,
        entity: String,
        winning: bool,
    },
    /// A two-phase mode moved from the primary to the secondary phase.
    PhaseAdvanced {
        mode: ModeKey,
    },
    SessionWon {
        mode: ModeKey,
        guesses: usize,
    },
    SessionLost {
        mode: ModeKey,
        target: String,
    },
}

impl SessionEvent {
    pub fn mode(&self) -> &ModeKey {
        match self {
            SessionEvent::SessionStarted { mode, .. } => mode,
            SessionEvent::GuessScored { mode, .. } => mode,
            SessionEvent::PhaseAdvanced { mode } => mode,
            SessionEvent::SessionWon { mode, .. } => mode,
            SessionEvent::SessionLost { mode, .. } => mode,
        }
    }
}

/// Handler trait for processing session events
pub trait SessionEventHandler {
    fn handle_event(&mut self, event: SessionEvent);
}

/// Simple event bus for distributing session events
pub struct SessionEventBus {
    handlers: Vec<Box<dyn SessionEventHandler>>,
}

impl SessionEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SessionEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: SessionEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for SessionEventBus {
    fn default() -> Self {
        Self::new()
    }
}
