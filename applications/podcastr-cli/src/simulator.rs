//! Simulated audio environment
//!
//! Stands in for a real media element: it knows each episode's length, keeps
//! a position clock that only moves when `advance` is called, and queues the
//! events a browser `<audio>` element would fire.

use podcastr_core::Episode;
use podcastr_playback::{AudioEvent, AudioOutput, PlaybackError, Result};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Default)]
pub struct SimulatedOutput {
    durations: HashMap<String, u64>,
    loaded: Option<String>,
    duration: u64,
    position: u64,
    playing: bool,
    looping: bool,
    pending: Vec<AudioEvent>,
}

impl SimulatedOutput {
    /// Create an environment that can render the given episodes
    pub fn new(episodes: &[Episode]) -> Self {
        Self {
            durations: episodes
                .iter()
                .map(|e| (e.url.clone(), e.duration))
                .collect(),
            ..Self::default()
        }
    }

    /// Let `seconds` of wall time pass
    ///
    /// Emits one position sample per second up to the end of the episode,
    /// then pauses and reports `Ended`, dropping any leftover time. A looping
    /// episode wraps instead and reports only its final position.
    pub fn advance(&mut self, seconds: u64) {
        if self.loaded.is_none() || !self.playing || seconds == 0 {
            return;
        }

        if self.looping {
            if self.duration > 0 {
                self.position = (self.position + seconds % self.duration) % self.duration;
            }
            self.pending
                .push(AudioEvent::PositionTick(self.position as f64));
            return;
        }

        let remaining = self.duration.saturating_sub(self.position);
        for _ in 0..seconds.min(remaining) {
            self.position += 1;
            self.pending
                .push(AudioEvent::PositionTick(self.position as f64));
        }

        if self.position >= self.duration {
            self.playing = false;
            self.pending.push(AudioEvent::Stopped);
            self.pending.push(AudioEvent::Ended);
        }
    }

    /// Take queued environment events
    pub fn drain_events(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn loaded_url(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}

impl AudioOutput for SimulatedOutput {
    fn load(&mut self, url: &str) -> Result<()> {
        let Some(&duration) = self.durations.get(url) else {
            return Err(PlaybackError::AudioOutput(format!("unknown media: {url}")));
        };

        debug!("Simulated output loading {} ({}s)", url, duration);
        self.loaded = Some(url.to_string());
        self.duration = duration;
        self.position = 0;
        self.playing = false;
        self.pending.clear();
        self.pending.push(AudioEvent::MetadataReady);
        Ok(())
    }

    fn unload(&mut self) -> Result<()> {
        self.loaded = None;
        self.duration = 0;
        self.position = 0;
        self.playing = false;
        self.pending.clear();
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        if self.loaded.is_none() {
            return Err(PlaybackError::AudioOutput("no media loaded".to_string()));
        }
        if !self.playing {
            self.playing = true;
            self.pending.push(AudioEvent::Started);
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if self.playing {
            self.playing = false;
            self.pending.push(AudioEvent::Stopped);
        }
        Ok(())
    }

    fn seek(&mut self, position_secs: u64) -> Result<()> {
        if self.loaded.is_none() {
            return Ok(());
        }
        self.position = position_secs.min(self.duration);
        self.pending
            .push(AudioEvent::PositionTick(self.position as f64));
        Ok(())
    }

    fn set_loop(&mut self, looping: bool) -> Result<()> {
        self.looping = looping;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output() -> SimulatedOutput {
        SimulatedOutput::new(&[
            Episode::new("Short", "https://example.com/short.mp3", 3),
            Episode::new("Long", "https://example.com/long.mp3", 600),
        ])
    }

    #[test]
    fn load_reports_metadata() {
        let mut output = output();
        output.load("https://example.com/long.mp3").unwrap();

        assert_eq!(output.loaded_url(), Some("https://example.com/long.mp3"));
        assert_eq!(output.drain_events(), vec![AudioEvent::MetadataReady]);
    }

    #[test]
    fn unknown_media_fails() {
        let mut output = output();
        assert!(output.load("https://example.com/missing.mp3").is_err());
        assert!(output.start().is_err());
    }

    #[test]
    fn start_and_stop_fire_only_on_change() {
        let mut output = output();
        output.load("https://example.com/long.mp3").unwrap();
        output.drain_events();

        output.start().unwrap();
        output.start().unwrap();
        output.stop().unwrap();
        output.stop().unwrap();

        assert_eq!(
            output.drain_events(),
            vec![AudioEvent::Started, AudioEvent::Stopped]
        );
    }

    #[test]
    fn advance_only_moves_while_playing() {
        let mut output = output();
        output.load("https://example.com/long.mp3").unwrap();
        output.advance(5);
        assert_eq!(output.position(), 0);

        output.start().unwrap();
        output.drain_events();
        output.advance(2);

        assert_eq!(output.position(), 2);
        assert_eq!(
            output.drain_events(),
            vec![AudioEvent::PositionTick(1.0), AudioEvent::PositionTick(2.0)]
        );
    }

    #[test]
    fn reaching_the_end_pauses_and_ends() {
        let mut output = output();
        output.load("https://example.com/short.mp3").unwrap();
        output.start().unwrap();
        output.drain_events();

        output.advance(10);

        assert!(!output.is_playing());
        assert_eq!(output.position(), 3);
        assert_eq!(
            output.drain_events(),
            vec![
                AudioEvent::PositionTick(1.0),
                AudioEvent::PositionTick(2.0),
                AudioEvent::PositionTick(3.0),
                AudioEvent::Stopped,
                AudioEvent::Ended,
            ]
        );
    }

    #[test]
    fn looping_wraps_without_ending() {
        let mut output = output();
        output.load("https://example.com/short.mp3").unwrap();
        output.set_loop(true).unwrap();
        output.start().unwrap();
        output.drain_events();

        output.advance(4);

        assert!(output.is_playing());
        assert_eq!(output.position(), 1);
        assert_eq!(output.drain_events(), vec![AudioEvent::PositionTick(1.0)]);
    }

    #[test]
    fn long_looping_advance_reports_one_sample() {
        let mut output = output();
        output.load("https://example.com/short.mp3").unwrap();
        output.set_loop(true).unwrap();
        output.start().unwrap();
        output.drain_events();

        output.advance(u64::MAX);

        // u64::MAX is divisible by 3
        assert_eq!(output.position(), 0);
        assert_eq!(output.drain_events(), vec![AudioEvent::PositionTick(0.0)]);

        output.advance(5_000_000);
        assert_eq!(output.position(), 5_000_000 % 3);
        assert_eq!(output.drain_events().len(), 1);
    }

    #[test]
    fn huge_advance_without_loop_stops_at_the_end() {
        let mut output = output();
        output.load("https://example.com/short.mp3").unwrap();
        output.start().unwrap();
        output.drain_events();

        output.advance(u64::MAX);

        assert_eq!(output.position(), 3);
        assert_eq!(output.drain_events().len(), 5);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let mut output = output();
        output.load("https://example.com/short.mp3").unwrap();
        output.drain_events();

        output.seek(100).unwrap();

        assert_eq!(output.position(), 3);
        assert_eq!(output.drain_events(), vec![AudioEvent::PositionTick(3.0)]);
    }
}
