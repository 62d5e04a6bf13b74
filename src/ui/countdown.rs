//! Output side of `watch`: one line per tick.

use crate::models::evaluation::Evaluation;
use crate::models::status::Status;
use crate::ui::render::Renderer;
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::ops::ControlFlow;

const CLEAR_LINE: &str = "\r\x1b[2K";

pub struct CountdownView<W: Write> {
    out: W,
    renderer: Renderer,
    /// Redraw the same terminal line instead of printing one line per tick.
    in_place: bool,
    exit_when_done: bool,
}

impl<W: Write> CountdownView<W> {
    pub fn new(out: W, renderer: Renderer, in_place: bool, exit_when_done: bool) -> Self {
        Self {
            out,
            renderer,
            in_place,
            exit_when_done,
        }
    }

    /// Draw one tick. Breaks when the output is gone or, with
    /// `exit_when_done`, once the workday is over.
    pub fn show(&mut self, eval: &Evaluation, now: NaiveDateTime) -> ControlFlow<()> {
        let line = self.renderer.countdown(eval, now);
        if let Err(e) = self.draw(&line) {
            tracing::warn!(error = %e, "cannot write countdown, stopping");
            return ControlFlow::Break(());
        }

        if self.exit_when_done && matches!(eval.status(), Some(Status::Finished)) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    fn draw(&mut self, line: &str) -> io::Result<()> {
        if self.in_place {
            write!(self.out, "{CLEAR_LINE}{line}")?;
        } else {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    /// Leave the cursor on a fresh line after in-place redraws.
    pub fn finish(&mut self) -> io::Result<()> {
        if self.in_place {
            writeln!(self.out)?;
            self.out.flush()?;
        }
        Ok(())
    }
}
