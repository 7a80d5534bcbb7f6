//! Game controller: owns the session, the selection engine, the tick
//! scheduler and the renderer, and routes input events between them.

use alloc::string::String;

use rand::rngs::SmallRng;

use crate::{
    common::{Coord, PuzzleError},
    config::GameSetup,
    l10n::L10n,
    renderer::{LockReason, Renderer},
    scheduler::TickScheduler,
    selection::SelectionEngine,
    session::{GameSession, GameStatus, MatchOutcome, TickOutcome},
};

pub struct GameController<R: Renderer, S: TickScheduler> {
    session: GameSession,
    selection: SelectionEngine,
    l10n: L10n,
    task_description: String,
    rng: SmallRng,
    renderer: R,
    scheduler: S,
}

impl<R: Renderer, S: TickScheduler> GameController<R, S> {
    /// Generate the first puzzle and arm the scheduler.
    pub fn new(
        setup: GameSetup,
        mut rng: SmallRng,
        renderer: R,
        scheduler: S,
    ) -> Result<Self, PuzzleError> {
        let session = GameSession::new(setup.entries, setup.behaviour, &mut rng)?;
        let mut controller = Self {
            selection: SelectionEngine::new(session.grid().size()),
            session,
            l10n: setup.l10n,
            task_description: setup.task_description,
            rng,
            renderer,
            scheduler,
        };
        controller.begin();
        Ok(controller)
    }

    /// Tear down the running game and start a fresh puzzle.
    ///
    /// If generation fails the previous puzzle stays in place and its timer
    /// is re-armed when it was still running.
    pub fn restart(&mut self) -> Result<(), PuzzleError> {
        self.scheduler.cancel();
        self.cancel_selection();
        if let Err(e) = self.session.start(&mut self.rng) {
            log::warn!("restart failed: {}", e);
            if !self.session.is_locked() {
                self.scheduler.arm();
            }
            return Err(e);
        }
        self.begin();
        Ok(())
    }

    fn begin(&mut self) {
        self.selection.reset(self.session.grid().size());
        self.renderer
            .puzzle_ready(self.session.puzzle(), self.session.entries());
        let (found, total) = self.session.score();
        self.renderer.score_changed(found, total);
        self.renderer.elapsed_changed(self.session.elapsed_seconds());
        self.scheduler.arm();
    }

    /// Pointer pressed on `cell`. Ignored while locked.
    pub fn pointer_down(&mut self, cell: Coord) {
        if self.session.is_locked() {
            return;
        }
        if self.selection.start(cell) {
            self.renderer.selection_changed(self.selection.path());
        }
    }

    /// Pointer moved over `cell`, or off the grid when `None`.
    pub fn pointer_move(&mut self, cell: Option<Coord>) {
        if self.session.is_locked() {
            return;
        }
        if self.selection.move_to(cell) {
            self.renderer.selection_changed(self.selection.path());
        }
    }

    /// Pointer released: check the selection and mark a matched word found.
    /// Returns the index of the newly found placement.
    pub fn pointer_up(&mut self) -> Option<usize> {
        if !self.selection.is_dragging() {
            return None;
        }
        if self.session.is_locked() {
            self.cancel_selection();
            return None;
        }

        let session = &self.session;
        let matched = self
            .selection
            .end(session.grid(), session.lookup(), |i| session.is_pending(i));
        self.renderer.selection_changed(&[]);

        let index = matched?;
        let outcome = self.session.on_match(index);
        if outcome == MatchOutcome::Ignored {
            return None;
        }
        self.renderer
            .word_found(index, &self.session.placements()[index]);
        let (found, total) = self.session.score();
        self.renderer.score_changed(found, total);

        if outcome == MatchOutcome::Completed {
            self.scheduler.cancel();
            self.renderer.locked(LockReason::Completed);
        }
        Some(index)
    }

    /// Abort the current gesture, if any.
    pub fn pointer_cancel(&mut self) {
        self.cancel_selection();
    }

    fn cancel_selection(&mut self) {
        if self.selection.is_dragging() {
            self.selection.cancel();
            self.renderer.selection_changed(&[]);
        }
    }

    /// One second elapsed.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.session.tick();
        match outcome {
            TickOutcome::Stopped => self.scheduler.cancel(),
            TickOutcome::Running(seconds) => self.renderer.elapsed_changed(seconds),
            TickOutcome::Expired => {
                self.scheduler.cancel();
                self.cancel_selection();
                self.renderer
                    .elapsed_changed(self.session.elapsed_seconds());
                self.renderer.locked(LockReason::TimeExpired);
            }
        }
        outcome
    }

    /// Show every unfound word and lock the game. Returns `false` when the
    /// solution may not be shown or the game is already locked.
    pub fn reveal(&mut self) -> bool {
        if !self.session.behaviour().enable_show_solution {
            return false;
        }
        let Some(solved) = self.session.reveal() else {
            return false;
        };
        self.scheduler.cancel();
        self.cancel_selection();
        for index in solved {
            self.renderer
                .word_solved(index, &self.session.placements()[index]);
        }
        self.renderer.locked(LockReason::Revealed);
        true
    }

    /// Score feedback text.
    pub fn check(&self) -> String {
        let (found, total) = self.session.score();
        self.l10n.score_label(found, total)
    }

    /// Retry is offered when enabled, and always after the time ran out.
    pub fn can_retry(&self) -> bool {
        self.session.behaviour().enable_retry || self.session.status() == GameStatus::TimeExpired
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn selection(&self) -> &SelectionEngine {
        &self.selection
    }

    pub fn task_description(&self) -> &str {
        &self.task_description
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }
}
