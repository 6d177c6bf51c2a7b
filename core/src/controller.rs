use crate::*;

/// Drives a [`PlayEngine`] on top of host timers.
///
/// The controller owns the repeating tick for as long as a game is running and drops it the moment the game is won or
/// restarted. Delayed pair resolution and the win banner are handed to the [`Scheduler`] tagged with the current board
/// generation, so a restart never has to chase callbacks that are already in flight.
pub struct GameController<S: Scheduler> {
    config: GameConfig,
    engine: PlayEngine,
    scheduler: S,
    timer: Option<S::Interval>,
}

impl<S: Scheduler> GameController<S> {
    pub fn new(config: GameConfig, generator: impl BoardGenerator, scheduler: S) -> Self {
        Self {
            config,
            engine: PlayEngine::new(generator.generate(config)),
            scheduler,
            timer: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn engine(&self) -> &PlayEngine {
        &self.engine
    }

    pub fn view(&self) -> BoardView {
        BoardView::from_engine(&self.engine)
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts the clock. Only the first call of a fresh game has an effect.
    pub fn start_game(&mut self) -> bool {
        if self.engine.start() {
            self.start_timer();
            true
        } else {
            false
        }
    }

    pub fn flip(&mut self, index: CardIndex) -> FlipOutcome {
        let was_ready = self.engine.state().is_ready();
        let outcome = self.engine.flip(index);

        if was_ready && outcome.has_update() {
            self.start_timer();
        }

        if outcome.completes_pair() {
            self.schedule(ActionKind::FlipBack);
        }

        if outcome == FlipOutcome::Won {
            self.stop_timer();
            self.schedule(ActionKind::AnnounceWin);
        }

        outcome
    }

    pub fn tick(&mut self) -> bool {
        self.engine.tick()
    }

    pub fn resolve(&mut self, action: ScheduledAction) -> ResolveOutcome {
        self.engine.resolve(action)
    }

    /// Throws the current game away and deals a new board.
    pub fn restart_game(&mut self, generator: impl BoardGenerator) {
        self.stop_timer();
        self.engine.restart(generator.generate(self.config));
    }

    fn schedule(&mut self, kind: ActionKind) {
        let action = ScheduledAction {
            generation: self.engine.generation(),
            kind,
        };
        log::trace!("scheduling {:?}", action);
        self.scheduler.schedule(action);
    }

    fn start_timer(&mut self) {
        if self.timer.is_none() {
            log::debug!("timer started");
            self.timer = Some(self.scheduler.start_interval());
        }
    }

    fn stop_timer(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("timer stopped");
        }
    }
}

impl<S: Scheduler> core::fmt::Debug for GameController<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameController")
            .field("config", &self.config)
            .field("engine", &self.engine)
            .field("timer_running", &self.timer.is_some())
            .finish_non_exhaustive()
    }
}
