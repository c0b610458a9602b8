//! Windowless platform with a simulated clock
//!
//! Each `poll_events` advances the clock by one frame. Keys and events are
//! scripted by the caller.

use std::collections::{HashSet, VecDeque};

use super::{Key, Platform, WindowEvent};

#[derive(Debug)]
pub struct HeadlessPlatform {
    time: f64,
    frame_dt: f64,
    frame: u64,
    max_frames: Option<u64>,
    closed: bool,
    held: HashSet<Key>,
    pending: VecDeque<WindowEvent>,
}

impl HeadlessPlatform {
    /// `frame_dt` seconds per frame, closing after `max_frames` if set
    pub fn new(frame_dt: f64, max_frames: Option<u64>) -> Self {
        Self {
            time: 0.0,
            frame_dt,
            frame: 0,
            max_frames,
            closed: false,
            held: HashSet::new(),
            pending: VecDeque::new(),
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Queue an event for the next poll
    pub fn push_event(&mut self, event: WindowEvent) {
        self.pending.push_back(event);
    }
}

impl Platform for HeadlessPlatform {
    fn should_close(&self) -> bool {
        self.closed || self.max_frames.is_some_and(|max| self.frame >= max)
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.frame += 1;
        self.time += self.frame_dt;

        let events: Vec<WindowEvent> = self.pending.drain(..).collect();
        if events.contains(&WindowEvent::CloseRequested) {
            self.closed = true;
        }
        events
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn time(&self) -> f64 {
        self.time
    }
}
