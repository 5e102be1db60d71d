//! Run/stop state machine
//!
//! Composes the simulation into Idle -> Running -> Over transitions. The
//! shell owns the timers; this type owns the session identity. Every entry
//! into Running allocates a fresh `GameState` and bumps the generation
//! counter, so a callback captured by a previous run can compare
//! generations and refuse to touch the new one.

use super::state::GameState;

/// Current phase of the session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pre-start screen, listening only for the start trigger
    Idle,
    /// Loop active, accepting flap input
    Running,
    /// Run ended, blocking confirmation pending
    Over,
}

/// The session state machine and the run it owns
#[derive(Debug)]
pub struct SessionController {
    phase: Phase,
    game: GameState,
    generation: u64,
}

impl SessionController {
    pub fn new() -> Self {
        // Placeholder run; replaced wholesale on the first start.
        let mut game = GameState::new(0);
        game.active = false;
        Self {
            phase: Phase::Idle,
            game,
            generation: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// Identity of the current Running entry
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Idle -> Running with a fresh run
    pub fn start(&mut self, seed: u64) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.begin_run(seed);
        true
    }

    /// Running -> Over on a detected collision
    pub fn end_run(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.game.active = false;
        self.phase = Phase::Over;
        log::info!("Run over at score {}", self.game.score);
        true
    }

    /// Over -> Running, discarding the finished run entirely
    pub fn restart(&mut self, seed: u64) -> bool {
        if self.phase != Phase::Over {
            return false;
        }
        self.begin_run(seed);
        true
    }

    /// Over -> Idle, back to the pre-start screen. The finished run is
    /// discarded here too, so nothing of it shows on the next readout.
    pub fn go_home(&mut self) -> bool {
        if self.phase != Phase::Over {
            return false;
        }
        let mut game = GameState::new(0);
        game.active = false;
        self.game = game;
        self.phase = Phase::Idle;
        true
    }

    fn begin_run(&mut self, seed: u64) {
        self.game = GameState::new(seed);
        self.generation += 1;
        self.phase = Phase::Running;
        log::info!("Run {} started (seed {})", self.generation, seed);
    }
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::consts::BIRD_START_Y;
    use crate::sim::{TickInput, spawn_pipe, tick};

    #[test]
    fn test_full_cycle() {
        let mut ctl = SessionController::new();
        assert_eq!(ctl.phase(), Phase::Idle);

        assert!(ctl.start(1));
        assert_eq!(ctl.phase(), Phase::Running);

        assert!(ctl.end_run());
        assert_eq!(ctl.phase(), Phase::Over);

        assert!(ctl.restart(2));
        assert_eq!(ctl.phase(), Phase::Running);

        ctl.game_mut().score = 9;
        assert!(ctl.end_run());
        assert!(ctl.go_home());
        assert_eq!(ctl.phase(), Phase::Idle);
        // The finished run went with it.
        assert_eq!(ctl.game().score, 0);
        assert!(!ctl.game().active);
    }

    #[test]
    fn test_illegal_transitions_are_rejected() {
        let mut ctl = SessionController::new();
        assert!(!ctl.end_run());
        assert!(!ctl.restart(1));
        assert!(!ctl.go_home());

        ctl.start(1);
        assert!(!ctl.start(2));
        assert!(!ctl.restart(2));
        assert!(!ctl.go_home());
    }

    #[test]
    fn test_restart_discards_previous_run() {
        let tuning = Tuning::default();
        let mut ctl = SessionController::new();
        ctl.start(7);

        // Dirty the run: pipes, a moved bird, a score.
        spawn_pipe(ctl.game_mut(), &tuning);
        ctl.game_mut().score = 5;
        for _ in 0..10 {
            tick(ctl.game_mut(), &TickInput::default(), &tuning);
        }
        assert!(ctl.game().bird.y != BIRD_START_Y);

        ctl.end_run();
        ctl.restart(8);

        let game = ctl.game();
        assert_eq!(game.score, 0);
        assert_eq!(game.bird.y, BIRD_START_Y);
        assert_eq!(game.bird.velocity, 0.0);
        assert!(game.pipes.is_empty());
        assert!(game.active);
    }

    #[test]
    fn test_each_running_entry_has_its_own_generation() {
        let mut ctl = SessionController::new();
        ctl.start(1);
        let first = ctl.generation();

        ctl.end_run();
        ctl.restart(1);
        let second = ctl.generation();

        // A callback holding `first` must not pass a generation check now.
        assert_ne!(first, second);
    }

    #[test]
    fn test_end_run_deactivates_game_for_pending_spawns() {
        let tuning = Tuning::default();
        let mut ctl = SessionController::new();
        ctl.start(1);
        ctl.end_run();

        // A spawn callback that was already queued when the run ended
        // finds the active flag cleared and does nothing.
        spawn_pipe(ctl.game_mut(), &tuning);
        assert!(ctl.game().pipes.is_empty());
    }
}
