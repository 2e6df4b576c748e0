//! Frame-driven loop driver.
//!
//! The caller owns scheduling: it calls [`GameLoop::frame`] once per display
//! refresh with the current time and whatever input was queued since the last
//! frame. Everything inside a frame runs synchronously, so input can never
//! interleave with an automatic drop.

use crate::game_state::GameState;
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// External output collaborators: the render callback and the score display.
pub trait Presenter {
    /// Draw the current frame. Called once per frame.
    fn render(&mut self, snapshot: &GameSnapshot);

    /// Show a new score value. Called only when the score changed.
    fn show_score(&mut self, score: u32);
}

/// Tracks frame timing and reuses one snapshot buffer across frames.
#[derive(Debug, Clone, Default)]
pub struct GameLoop {
    last_time_ms: u64,
    snapshot: GameSnapshot,
}

impl GameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_time_ms(&self) -> u64 {
        self.last_time_ms
    }

    /// Run one frame at absolute time `now_ms`.
    ///
    /// Order: drain `actions`, advance the drop counter by the time since the
    /// previous frame, push the score if it changed, render.
    /// Returns true if an automatic drop happened this frame.
    pub fn frame<P>(
        &mut self,
        state: &mut GameState,
        now_ms: u64,
        actions: impl IntoIterator<Item = GameAction>,
        presenter: &mut P,
    ) -> bool
    where
        P: Presenter + ?Sized,
    {
        for action in actions {
            state.apply_action(action);
        }

        let delta = now_ms.saturating_sub(self.last_time_ms);
        self.last_time_ms = now_ms;
        let dropped = state.tick(u32::try_from(delta).unwrap_or(u32::MAX));

        if let Some(score) = state.take_score_change() {
            presenter.show_score(score);
        }

        state.snapshot_into(&mut self.snapshot);
        presenter.render(&self.snapshot);

        dropped
    }
}
