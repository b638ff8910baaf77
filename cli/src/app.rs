use std::io::{BufRead, Write};

use sweeper_core::{GameConfig, MarkOutcome, Phase, RevealOutcome, Session};

use crate::clock::Stopwatch;
use crate::command::{Command, HELP};
use crate::render::render;

/// Read-eval-render loop over one session.
pub struct App<R, W> {
    input: R,
    output: W,
    session: Session,
    clock: Stopwatch,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(config: GameConfig, seed: u64, input: R, output: W) -> anyhow::Result<Self> {
        Ok(Self {
            input,
            output,
            session: Session::new(config, seed)?,
            clock: Stopwatch::default(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{HELP}")?;
        self.render()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.apply(command)?,
                Err(err) => writeln!(self.output, "{err}, type `h` for help")?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn apply(&mut self, command: Command) -> anyhow::Result<()> {
        let updated = match command {
            Command::Reveal(coords) => match self.session.reveal(coords) {
                Ok(outcome) => {
                    if outcome == RevealOutcome::Blocked {
                        writeln!(self.output, "Cell is flagged, unflag it first")?;
                    } else if outcome == RevealOutcome::Detonated {
                        tracing::info!(?coords, steps = self.session.steps(), "game lost");
                    }
                    outcome.has_update()
                }
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    false
                }
            },
            Command::Flag(coords) => match self.session.toggle_flag(coords) {
                Ok(outcome) => {
                    if outcome == MarkOutcome::NoChange {
                        writeln!(self.output, "Cannot flag that cell")?;
                    }
                    outcome.has_update()
                }
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    false
                }
            },
            Command::Pause => {
                let toggled = self.session.toggle_pause();
                if !toggled {
                    writeln!(self.output, "Nothing to pause")?;
                }
                toggled
            }
            Command::New => {
                let seed = self.session.seed().wrapping_add(1);
                self.session.restart(seed)?;
                self.clock.reset();
                true
            }
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                false
            }
            Command::Quit => false,
        };

        self.clock.follow(self.session.phase());
        if !updated {
            return Ok(());
        }

        self.render()?;
        match self.session.phase() {
            Phase::Won => {
                tracing::info!(elapsed = ?self.clock.elapsed(), "game won");
                writeln!(self.output, "You won! Type `n` to play again")?;
            }
            Phase::Lost => writeln!(self.output, "You lost! Type `n` to retry")?,
            _ => {}
        }
        Ok(())
    }

    fn render(&mut self) -> anyhow::Result<()> {
        render(&mut self.output, &self.session, self.clock.elapsed())?;
        Ok(())
    }
}
