//! Terminal implementation of the core `Presenter` seam.
//!
//! `Presenter` methods cannot fail, so the first I/O error is parked here and
//! surfaced by [`TermPresenter::take_error`] after the frame.

use std::io::{self, Write};

use anyhow::Result;

use crate::core::{GameSnapshot, Presenter};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TermPresenter<W: Write = io::Stdout> {
    view: GameView,
    renderer: TerminalRenderer<W>,
    fb: FrameBuffer,
    viewport: Viewport,
    score: u32,
    error: Option<anyhow::Error>,
}

impl TermPresenter<io::Stdout> {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_renderer(TerminalRenderer::new(), viewport)
    }
}

impl<W: Write> TermPresenter<W> {
    pub fn with_renderer(renderer: TerminalRenderer<W>, viewport: Viewport) -> Self {
        Self {
            view: GameView::default(),
            renderer,
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            score: 0,
            error: None,
        }
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    /// Last score pushed by the loop.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.renderer.invalidate();
    }

    /// Return the first draw error since the last call, if any.
    pub fn take_error(&mut self) -> Result<()> {
        match self.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<W: Write> Presenter for TermPresenter<W> {
    fn render(&mut self, snapshot: &GameSnapshot) {
        self.view
            .render_into(snapshot, self.score, self.viewport, &mut self.fb);
        if let Err(err) = self.renderer.draw_swap(&mut self.fb) {
            self.error.get_or_insert(err);
        }
    }

    fn show_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            width: 4,
            height: 4,
            board: vec![0; 16],
            ..GameSnapshot::default()
        }
    }

    #[test]
    fn score_is_drawn_from_last_push() {
        let renderer = TerminalRenderer::with_writer(Vec::new());
        let mut presenter = TermPresenter::with_renderer(renderer, Viewport::new(40, 8));

        presenter.show_score(30);
        presenter.render(&snapshot());

        assert_eq!(presenter.score(), 30);
        assert!(presenter.take_error().is_ok());
        let out = String::from_utf8_lossy(presenter.renderer_mut().writer()).into_owned();
        assert!(out.contains("Score: 30"));
    }

    #[test]
    fn draw_errors_are_parked_until_taken() {
        let renderer = TerminalRenderer::with_writer(FailingWriter);
        let mut presenter = TermPresenter::with_renderer(renderer, Viewport::new(20, 8));

        presenter.render(&snapshot());
        presenter.render(&snapshot());

        assert!(presenter.take_error().is_err());
        assert!(presenter.take_error().is_ok());
    }
}
