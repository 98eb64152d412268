//! Interactive listening session
//!
//! Binds a [`PlayerPanel`] to the [`SimulatedOutput`] and drives it from a
//! line-oriented command stream.

use crate::{config::PlayerSettings, simulator::SimulatedOutput};
use anyhow::{anyhow, bail, Context, Result};
use podcastr_core::Episode;
use podcastr_playback::{ControlState, Controls, PlayGlyph, PlaybackStore, PlayerPanel};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, warn};

/// Upper bound on environment feedback rounds after one command
const MAX_PUMP_ROUNDS: usize = 16;

const HELP: &str = "\
commands:
  toggle          play / pause
  next, prev      skip within the queue
  loop, shuffle   toggle modes
  seek <secs>     jump to a position
  tick [secs]     let time pass
  status          show the player
  clear           stop and empty the queue
  quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Next,
    Previous,
    Loop,
    Shuffle,
    Seek(u64),
    /// `None` uses the configured tick length
    Tick(Option<u64>),
    Status,
    Clear,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            bail!("empty command");
        };
        let argument = words.next();
        if words.next().is_some() {
            bail!("too many arguments for `{name}`");
        }

        let seconds = |arg: &str| {
            arg.parse::<u64>()
                .with_context(|| format!("`{arg}` is not a number of seconds"))
        };

        let command = match (name, argument) {
            ("toggle" | "play" | "pause", None) => Self::Toggle,
            ("next" | "n", None) => Self::Next,
            ("prev" | "previous" | "p", None) => Self::Previous,
            ("loop" | "l", None) => Self::Loop,
            ("shuffle" | "s", None) => Self::Shuffle,
            ("seek", Some(arg)) => Self::Seek(seconds(arg)?),
            ("seek", None) => bail!("usage: seek <secs>"),
            ("tick" | "t", arg) => Self::Tick(arg.map(seconds).transpose()?),
            ("status", None) => Self::Status,
            ("clear", None) => Self::Clear,
            ("help" | "?", None) => Self::Help,
            ("quit" | "exit" | "q", None) => Self::Quit,
            (_, Some(_)) if is_known(name) => bail!("`{name}` takes no argument"),
            _ => return Err(anyhow!("unknown command `{name}` (try `help`)")),
        };
        Ok(command)
    }
}

fn is_known(name: &str) -> bool {
    matches!(
        name,
        "toggle"
            | "play"
            | "pause"
            | "next"
            | "n"
            | "prev"
            | "previous"
            | "p"
            | "loop"
            | "l"
            | "shuffle"
            | "s"
            | "status"
            | "clear"
            | "help"
            | "?"
            | "quit"
            | "exit"
            | "q"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    panel: PlayerPanel<SimulatedOutput>,
    tick_seconds: u64,
}

impl Session {
    /// Create a session able to render `episodes`
    pub fn new(episodes: &[Episode], settings: &PlayerSettings) -> Self {
        let store = PlaybackStore::new(settings.player_config());
        Self {
            panel: PlayerPanel::with_output(store, SimulatedOutput::new(episodes)),
            tick_seconds: settings.tick_seconds,
        }
    }

    pub fn start_list(&mut self, episodes: Vec<Episode>, index: usize) {
        self.panel.play_list(episodes, index);
        self.pump();
    }

    pub fn start_single(&mut self, episode: Episode) {
        self.panel.play_single(episode);
        self.pump();
    }

    pub fn panel(&self) -> &PlayerPanel<SimulatedOutput> {
        &self.panel
    }

    /// Apply one command
    pub fn execute(&mut self, command: Command) -> Flow {
        debug!(?command, "session command");
        match command {
            Command::Toggle => self.panel.toggle_play(),
            Command::Next => self.panel.play_next(),
            Command::Previous => self.panel.play_previous(),
            Command::Loop => self.panel.toggle_loop(),
            Command::Shuffle => self.panel.toggle_shuffle(),
            Command::Seek(position) => self.panel.seek(position),
            Command::Tick(seconds) => {
                let seconds = seconds.unwrap_or(self.tick_seconds);
                if let Some(output) = self.panel.output_mut() {
                    output.advance(seconds);
                }
            }
            Command::Clear => self.panel.clear(),
            Command::Status | Command::Help => {}
            Command::Quit => return Flow::Quit,
        }
        self.pump();
        Flow::Continue
    }

    /// Feed environment events back into the panel until it settles
    fn pump(&mut self) {
        for _ in 0..MAX_PUMP_ROUNDS {
            let events = match self.panel.output_mut() {
                Some(output) => output.drain_events(),
                None => return,
            };
            if events.is_empty() {
                return;
            }
            for event in events {
                self.panel.handle_audio_event(event);
            }
        }
        warn!("Audio environment did not settle after {} rounds", MAX_PUMP_ROUNDS);
    }

    /// One-line description of the player
    pub fn status_line(&self) -> String {
        let view = self.panel.view();
        let Some(episode) = view.episode else {
            return "Nothing playing".to_string();
        };

        let state = if self.panel.store().is_playing() {
            "Playing"
        } else {
            "Paused"
        };
        let mut line = format!("{state}: {}", episode.title);
        if !episode.members.is_empty() {
            line.push_str(&format!(" ({})", episode.members));
        }
        format!(
            "{line} [{}/{}] {}",
            view.progress_label,
            view.duration_label,
            render_controls(&view.controls)
        )
    }
}

/// Render the control row, e.g. `[shuffle] (prev) [pause] [next] [loop*]`
///
/// Disabled buttons are parenthesized and active ones starred.
pub fn render_controls(controls: &Controls) -> String {
    let button = |label: &str, state: ControlState| {
        let star = if state.active { "*" } else { "" };
        if state.enabled {
            format!("[{label}{star}]")
        } else {
            format!("({label}{star})")
        }
    };

    let glyph = match controls.glyph {
        PlayGlyph::Play => "play",
        PlayGlyph::Pause => "pause",
    };

    [
        button("shuffle", controls.shuffle),
        button("prev", controls.previous),
        // The glyph already shows the play state
        button(glyph, ControlState { active: false, ..controls.play_pause }),
        button("next", controls.next),
        button("loop", controls.looping),
    ]
    .join(" ")
}

/// Run commands from `input` until `quit` or end of input
///
/// Bad commands are reported and skipped; only I/O failures end the run.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> Result<()> {
    writeln!(output, "{}", session.status_line())?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "error: {e:#}")?;
                continue;
            }
        };

        if session.execute(command) == Flow::Quit {
            break;
        }
        if command == Command::Help {
            writeln!(output, "{HELP}")?;
        } else {
            writeln!(output, "{}", session.status_line())?;
        }
    }

    output.flush()?;
    Ok(())
}
