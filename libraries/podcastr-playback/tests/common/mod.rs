//! Shared helpers for playback integration tests

#![allow(dead_code)]

use podcastr_core::Episode;
use podcastr_playback::{AudioOutput, Result};

/// Command received by [`RecordingOutput`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Load(String),
    Unload,
    Start,
    Stop,
    Seek(u64),
    SetLoop(bool),
}

/// Output that records every command it receives
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub commands: Vec<Command>,
}

impl RecordingOutput {
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// URL of the most recent load, if the output still has media
    pub fn loaded_url(&self) -> Option<&str> {
        let mut loaded = None;
        for command in &self.commands {
            match command {
                Command::Load(url) => loaded = Some(url.as_str()),
                Command::Unload => loaded = None,
                _ => {}
            }
        }
        loaded
    }
}

impl AudioOutput for RecordingOutput {
    fn load(&mut self, url: &str) -> Result<()> {
        self.commands.push(Command::Load(url.to_string()));
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.commands.push(Command::Unload);
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        self.commands.push(Command::Start);
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        self.commands.push(Command::Stop);
        Ok(())
    }

    fn seek(&mut self, position_secs: u64) -> Result<()> {
        self.commands.push(Command::Seek(position_secs));
        Ok(())
    }

    fn set_loop(&mut self, looping: bool) -> Result<()> {
        self.commands.push(Command::SetLoop(looping));
        Ok(())
    }
}

pub fn create_episode(n: usize, duration: u64) -> Episode {
    Episode::new(
        format!("Episode {n}"),
        format!("https://cdn.example.com/episodes/{n}.mp3"),
        duration,
    )
    .with_members(format!("Host {n}"))
    .with_thumbnail(format!("https://cdn.example.com/thumbs/{n}.jpg"))
}

pub fn create_episodes(count: usize) -> Vec<Episode> {
    (0..count).map(|n| create_episode(n, 600)).collect()
}

pub fn url(n: usize) -> String {
    format!("https://cdn.example.com/episodes/{n}.mp3")
}
