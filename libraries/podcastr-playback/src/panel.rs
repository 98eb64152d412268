//! Player panel - reconciles the audio output with the playback store
//!
//! User intents go through the panel so that every store mutation is followed
//! by a reconciliation pass: the panel drains the store's events and issues
//! the matching output commands before returning.
//!
//! ```text
//! user intent ──► PlaybackStore ──► StoreEvent* ──► AudioOutput commands
//!                       ▲
//! AudioEvent ───────────┘ (Started/Stopped mirror, Ended advances)
//! ```

use crate::{
    controls::Controls,
    error::Result,
    events::{StoreEvent, SubscriptionId},
    output::{AudioEvent, AudioOutput},
    store::PlaybackStore,
    time::format_duration,
};
use podcastr_core::Episode;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Everything a front end needs to draw the player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView<'a> {
    /// Now-playing episode
    pub episode: Option<&'a Episode>,
    /// Displayed position in whole seconds (slider value)
    pub progress: u64,
    /// Episode length in whole seconds (slider max), 0 when empty
    pub duration: u64,
    pub progress_label: String,
    pub duration_label: String,
    pub controls: Controls,
}

/// Player panel bound to a store and an optional audio output
pub struct PlayerPanel<O: AudioOutput> {
    store: PlaybackStore,
    output: Option<O>,
    progress: u64,
    sampling: bool,
}

impl<O: AudioOutput> PlayerPanel<O> {
    /// Create a panel without an audio output
    ///
    /// Output commands are skipped until one is attached. The panel turns on
    /// event recording for the store it owns.
    pub fn new(mut store: PlaybackStore) -> Self {
        store.record_events(true);
        Self {
            store,
            output: None,
            progress: 0,
            sampling: false,
        }
    }

    /// Create a panel and attach `output` right away
    pub fn with_output(store: PlaybackStore, output: O) -> Self {
        let mut panel = Self::new(store);
        panel.attach_output(output);
        panel
    }

    /// Attach an output and bring it in line with the store
    pub fn attach_output(&mut self, output: O) {
        self.output = Some(output);
        self.store.drain_events();
        self.progress = 0;
        self.sampling = false;

        let Some(url) = self.store.current_episode().map(|e| e.url.clone()) else {
            return;
        };
        let looping = self.store.is_looping();
        self.command("load", |o| o.load(&url));
        self.command("set_loop", |o| o.set_loop(looping));
        if self.store.is_playing() {
            self.command("start", |o| o.start());
        }
    }

    /// Detach and return the output
    pub fn detach_output(&mut self) -> Option<O> {
        self.sampling = false;
        self.output.take()
    }

    pub fn output(&self) -> Option<&O> {
        self.output.as_ref()
    }

    pub fn output_mut(&mut self) -> Option<&mut O> {
        self.output.as_mut()
    }

    /// Read-only access to the store; mutate through the panel
    pub fn store(&self) -> &PlaybackStore {
        &self.store
    }

    /// Register a store observer
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        self.store.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    // ===== User Intents =====

    pub fn play_single(&mut self, episode: Episode) {
        self.store.play_single(episode);
        self.reconcile();
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.store.play_list(list, index);
        self.reconcile();
    }

    pub fn toggle_play(&mut self) {
        self.store.toggle_play();
        self.reconcile();
    }

    pub fn toggle_loop(&mut self) {
        self.store.toggle_loop();
        self.reconcile();
    }

    pub fn toggle_shuffle(&mut self) {
        self.store.toggle_shuffle();
        self.reconcile();
    }

    pub fn play_next(&mut self) {
        self.store.play_next();
        self.reconcile();
    }

    pub fn play_previous(&mut self) {
        self.store.play_previous();
        self.reconcile();
    }

    pub fn clear(&mut self) {
        self.store.clear_player_state();
        self.reconcile();
    }

    /// Seek the current episode
    ///
    /// The position is clamped to the episode duration and shown immediately,
    /// without waiting for the next position sample.
    pub fn seek(&mut self, position_secs: u64) {
        let Some(duration) = self.store.current_episode().map(|e| e.duration) else {
            return;
        };
        let position = position_secs.min(duration);
        self.command("seek", |o| o.seek(position));
        self.progress = position;
    }

    // ===== Audio Environment =====

    /// React to an event reported by the audio environment
    pub fn handle_audio_event(&mut self, event: AudioEvent) {
        trace!(?event, "audio event");
        match event {
            AudioEvent::Started | AudioEvent::Stopped => {
                self.store
                    .set_playing_state(matches!(event, AudioEvent::Started));
                // The output is already in this state; nothing to command
                self.store.drain_events();
            }
            AudioEvent::MetadataReady => {
                if self.store.current_episode().is_none() {
                    return;
                }
                self.progress = 0;
                self.sampling = true;
                self.command("seek", |o| o.seek(0));
            }
            AudioEvent::PositionTick(position) => {
                if self.sampling {
                    self.progress = position.max(0.0).floor() as u64;
                }
            }
            AudioEvent::Ended => {
                if self.store.has_next() {
                    self.store.play_next();
                } else {
                    self.store.clear_player_state();
                }
                self.reconcile();
            }
        }
    }

    // ===== View =====

    /// Displayed position in whole seconds
    pub fn progress(&self) -> u64 {
        self.progress
    }

    pub fn controls(&self) -> Controls {
        Controls::for_store(&self.store)
    }

    pub fn view(&self) -> PanelView<'_> {
        let episode = self.store.current_episode();
        let duration = episode.map_or(0, |e| e.duration);

        PanelView {
            episode,
            progress: self.progress,
            duration,
            progress_label: format_duration(self.progress),
            duration_label: format_duration(duration),
            controls: self.controls(),
        }
    }

    // ===== Reconciliation =====

    fn reconcile(&mut self) {
        // Autoplay on episode change emits one more PlayingChanged, so this
        // settles after at most two passes.
        loop {
            let events = self.store.drain_events();
            if events.is_empty() {
                break;
            }
            self.apply(&events);
        }
    }

    fn apply(&mut self, events: &[StoreEvent]) {
        if events.iter().any(StoreEvent::changes_episode) {
            match self.store.current_episode().map(|e| e.url.clone()) {
                Some(url) => self.load_current(&url),
                None => self.teardown(),
            }
            return;
        }

        if self.store.current_episode().is_none() {
            return;
        }

        for event in events {
            match *event {
                StoreEvent::LoopingChanged(looping) => {
                    self.command("set_loop", |o| o.set_loop(looping));
                }
                StoreEvent::PlayingChanged(true) => self.command("start", |o| o.start()),
                StoreEvent::PlayingChanged(false) => self.command("stop", |o| o.stop()),
                _ => {}
            }
        }
    }

    fn load_current(&mut self, url: &str) {
        debug!("Loading episode {}", url);
        self.progress = 0;
        self.sampling = false;

        let looping = self.store.is_looping();
        self.command("load", |o| o.load(url));
        self.command("set_loop", |o| o.set_loop(looping));

        if self.store.is_playing() {
            self.command("start", |o| o.start());
        } else {
            // New media autoplays; the resulting PlayingChanged starts output
            self.store.set_playing_state(true);
        }
    }

    fn teardown(&mut self) {
        debug!("Queue empty, unloading output");
        self.progress = 0;
        self.sampling = false;
        self.command("unload", |o| o.unload());
    }

    fn command(&mut self, name: &'static str, f: impl FnOnce(&mut O) -> Result<()>) {
        let Some(output) = self.output.as_mut() else {
            trace!("No audio output attached, skipping {}", name);
            return;
        };
        if let Err(e) = f(output) {
            warn!("Audio output command {} failed: {}", name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::PlaybackError, output::MockAudioOutput, types::PlayerConfig};

    #[derive(Debug, Clone, PartialEq)]
    enum Cmd {
        Load(String),
        Unload,
        Start,
        Stop,
        Seek(u64),
        SetLoop(bool),
    }

    #[derive(Default)]
    struct RecordingOutput {
        commands: Vec<Cmd>,
    }

    impl AudioOutput for RecordingOutput {
        fn load(&mut self, url: &str) -> Result<()> {
            self.commands.push(Cmd::Load(url.to_string()));
            Ok(())
        }
        fn unload(&mut self) -> Result<()> {
            self.commands.push(Cmd::Unload);
            Ok(())
        }
        fn start(&mut self) -> Result<()> {
            self.commands.push(Cmd::Start);
            Ok(())
        }
        fn stop(&mut self) -> Result<()> {
            self.commands.push(Cmd::Stop);
            Ok(())
        }
        fn seek(&mut self, position_secs: u64) -> Result<()> {
            self.commands.push(Cmd::Seek(position_secs));
            Ok(())
        }
        fn set_loop(&mut self, looping: bool) -> Result<()> {
            self.commands.push(Cmd::SetLoop(looping));
            Ok(())
        }
    }

    fn episode(n: usize) -> Episode {
        Episode::new(format!("Episode {n}"), format!("https://example.com/{n}.mp3"), 120)
    }

    fn episodes(count: usize) -> Vec<Episode> {
        (0..count).map(episode).collect()
    }

    fn panel() -> PlayerPanel<RecordingOutput> {
        PlayerPanel::with_output(PlaybackStore::default(), RecordingOutput::default())
    }

    fn take_commands(panel: &mut PlayerPanel<RecordingOutput>) -> Vec<Cmd> {
        std::mem::take(&mut panel.output_mut().unwrap().commands)
    }

    #[test]
    fn panel_leaves_no_events_behind() {
        let mut panel = panel();
        assert!(panel.store().is_recording_events());

        panel.play_list(episodes(3), 0);
        for _ in 0..1_000 {
            panel.toggle_play();
            panel.toggle_loop();
        }
        panel.handle_audio_event(AudioEvent::Stopped);

        assert!(!panel.store().has_pending_events());
    }

    #[test]
    fn play_single_loads_and_starts() {
        let mut panel = panel();

        panel.play_single(episode(0));

        assert_eq!(
            take_commands(&mut panel),
            vec![
                Cmd::Load("https://example.com/0.mp3".to_string()),
                Cmd::SetLoop(false),
                Cmd::Start,
            ]
        );
        assert!(panel.store().is_playing());
    }

    #[test]
    fn toggle_play_pauses_and_resumes() {
        let mut panel = panel();
        panel.play_single(episode(0));
        take_commands(&mut panel);

        panel.toggle_play();
        panel.toggle_play();

        assert_eq!(take_commands(&mut panel), vec![Cmd::Stop, Cmd::Start]);
    }

    #[test]
    fn toggle_loop_sets_output_loop() {
        let mut panel = panel();
        panel.play_single(episode(0));
        take_commands(&mut panel);

        panel.toggle_loop();

        assert_eq!(take_commands(&mut panel), vec![Cmd::SetLoop(true)]);
    }

    #[test]
    fn toggles_without_episode_issue_nothing() {
        let mut panel = panel();

        panel.toggle_play();
        panel.toggle_loop();
        panel.toggle_shuffle();

        assert!(take_commands(&mut panel).is_empty());
        assert!(panel.store().is_playing());
    }

    #[test]
    fn next_while_paused_autoplays_new_episode() {
        let mut panel = panel();
        panel.play_list(episodes(2), 0);
        panel.toggle_play();
        take_commands(&mut panel);

        panel.play_next();

        assert_eq!(
            take_commands(&mut panel),
            vec![
                Cmd::Load("https://example.com/1.mp3".to_string()),
                Cmd::SetLoop(false),
                Cmd::Start,
            ]
        );
        assert!(panel.store().is_playing());
    }

    #[test]
    fn metadata_resets_progress_and_enables_sampling() {
        let mut panel = panel();
        panel.play_single(episode(0));

        // Ticks before metadata are ignored
        panel.handle_audio_event(AudioEvent::PositionTick(12.0));
        assert_eq!(panel.progress(), 0);

        take_commands(&mut panel);
        panel.handle_audio_event(AudioEvent::MetadataReady);
        assert_eq!(take_commands(&mut panel), vec![Cmd::Seek(0)]);

        panel.handle_audio_event(AudioEvent::PositionTick(42.9));
        assert_eq!(panel.progress(), 42);
    }

    #[test]
    fn seek_clamps_and_updates_progress_immediately() {
        let mut panel = panel();
        panel.play_single(episode(0));
        take_commands(&mut panel);

        panel.seek(30);
        assert_eq!(panel.progress(), 30);

        panel.seek(10_000);
        assert_eq!(panel.progress(), 120);

        assert_eq!(take_commands(&mut panel), vec![Cmd::Seek(30), Cmd::Seek(120)]);
    }

    #[test]
    fn seek_without_episode_is_ignored() {
        let mut panel = panel();
        panel.seek(10);
        assert_eq!(panel.progress(), 0);
        assert!(take_commands(&mut panel).is_empty());
    }

    #[test]
    fn environment_play_pause_mirrors_without_commands() {
        let mut panel = panel();
        panel.play_single(episode(0));
        take_commands(&mut panel);

        panel.handle_audio_event(AudioEvent::Stopped);
        assert!(!panel.store().is_playing());
        panel.handle_audio_event(AudioEvent::Started);
        assert!(panel.store().is_playing());

        assert!(take_commands(&mut panel).is_empty());
    }

    #[test]
    fn ended_advances_when_there_is_a_next() {
        let mut panel = panel();
        panel.play_list(episodes(2), 0);
        take_commands(&mut panel);

        panel.handle_audio_event(AudioEvent::Ended);

        assert_eq!(panel.store().current_index(), 1);
        assert_eq!(
            take_commands(&mut panel),
            vec![
                Cmd::Load("https://example.com/1.mp3".to_string()),
                Cmd::SetLoop(false),
                Cmd::Start,
            ]
        );
    }

    #[test]
    fn ended_on_last_episode_clears_and_unloads() {
        let mut panel = panel();
        panel.play_list(episodes(2), 1);
        panel.handle_audio_event(AudioEvent::MetadataReady);
        panel.handle_audio_event(AudioEvent::PositionTick(119.0));
        take_commands(&mut panel);

        panel.handle_audio_event(AudioEvent::Ended);

        assert!(panel.store().queue().is_empty());
        assert_eq!(panel.progress(), 0);
        assert_eq!(take_commands(&mut panel), vec![Cmd::Unload]);
    }

    #[test]
    fn attach_output_syncs_existing_state() {
        let mut store = PlaybackStore::new(PlayerConfig {
            start_looping: true,
            ..PlayerConfig::default()
        });
        store.play_list(episodes(3), 2);

        let mut panel = PlayerPanel::with_output(store, RecordingOutput::default());

        assert_eq!(
            take_commands(&mut panel),
            vec![
                Cmd::Load("https://example.com/2.mp3".to_string()),
                Cmd::SetLoop(true),
                Cmd::Start,
            ]
        );
    }

    #[test]
    fn commands_are_skipped_without_output() {
        let mut panel: PlayerPanel<RecordingOutput> = PlayerPanel::new(PlaybackStore::default());

        panel.play_list(episodes(2), 0);
        panel.play_next();
        panel.seek(5);

        assert_eq!(panel.store().current_index(), 1);
        assert_eq!(panel.progress(), 5);
        assert!(panel.output().is_none());
    }

    #[test]
    fn failing_output_is_absorbed() {
        let mut output = MockAudioOutput::new();
        output
            .expect_load()
            .withf(|url: &str| url == "https://example.com/0.mp3")
            .times(1)
            .returning(|_| Err(PlaybackError::AudioOutput("network unreachable".to_string())));
        output.expect_set_loop().times(1).returning(|_| Ok(()));
        output
            .expect_start()
            .times(1)
            .returning(|| Err(PlaybackError::AudioOutput("autoplay blocked".to_string())));

        let mut panel = PlayerPanel::with_output(PlaybackStore::default(), output);
        panel.play_single(episode(0));

        assert!(panel.store().is_playing());
        assert_eq!(panel.store().current_index(), 0);
    }

    #[test]
    fn view_reports_labels_and_controls() {
        let mut panel = panel();
        let empty = panel.view();
        assert!(empty.episode.is_none());
        assert_eq!(empty.progress_label, "00:00");
        assert_eq!(empty.duration_label, "00:00");
        assert!(!empty.controls.play_pause.enabled);

        panel.play_list(episodes(2), 0);
        panel.handle_audio_event(AudioEvent::MetadataReady);
        panel.handle_audio_event(AudioEvent::PositionTick(65.0));

        let view = panel.view();
        assert_eq!(view.episode, Some(&episode(0)));
        assert_eq!(view.progress, 65);
        assert_eq!(view.duration, 120);
        assert_eq!(view.progress_label, "01:05");
        assert_eq!(view.duration_label, "02:00");
        assert!(view.controls.next.enabled);
        assert!(!view.controls.previous.enabled);
    }
}
