//! Typing/reading/erasing cycle for loading-screen tips.
//!
//! The machine owns no timers. A driver asks [`Typewriter::next_delay`] how
//! long to wait, sleeps, then calls [`Typewriter::tick`]. Transitions that need
//! no wait (a tip finished typing, a tip fully erased) are applied inside
//! `tick` and the control methods, so the machine is never observed mid-way.

use std::time::Duration;

use serde::Serialize;
use tracing::debug;

pub const DEFAULT_TIPS: [&str; 8] = [
    "We use route-level code splitting to cut initial bundle size.",
    "Critical assets are preloaded; the rest are prefetched after first paint.",
    "Long lists are virtualized to keep scrolling at 60fps.",
    "Expensive computations are memoized between renders.",
    "Images are lazy-loaded with responsive source sets.",
    "Requests are debounced/throttled to reduce network chatter.",
    "Skeleton screens keep transitions snappy and avoid layout shift.",
    "CDN caching + immutable file hashing accelerate repeat visits.",
];

const ERASE_FRACTION: f64 = 0.08;
const MIN_ERASE_INTERVAL: Duration = Duration::from_millis(18);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Delay before each typed character.
    pub typing: Duration,
    /// Extra dwell per character of the tip.
    pub per_char_read: Duration,
    pub min_read: Duration,
    pub max_read: Duration,
    pub looping: bool,
    /// Show whole tips at once and skip the erase animation.
    pub reduced_motion: bool,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            typing: Duration::from_millis(25),
            per_char_read: Duration::from_millis(40),
            min_read: Duration::from_millis(1400),
            max_read: Duration::from_millis(4200),
            looping: true,
            reduced_motion: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Reading,
    Erasing,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    tips: Vec<Vec<char>>,
    config: TypewriterConfig,
    index: usize,
    shown: usize,
    phase: Phase,
    paused: bool,
    finished: bool,
}

impl Typewriter {
    pub fn new<I, S>(tips: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut machine = Self {
            tips: tips.into_iter().map(|t| t.as_ref().chars().collect()).collect(),
            config,
            index: 0,
            shown: 0,
            phase: Phase::Typing,
            paused: false,
            finished: false,
        };
        machine.settle();
        machine
    }

    pub fn with_default_tips(config: TypewriterConfig) -> Self {
        Self::new(DEFAULT_TIPS, config)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tip_index(&self) -> usize {
        self.index
    }

    /// The currently visible prefix of the current tip.
    pub fn displayed(&self) -> String {
        self.current().iter().take(self.shown).collect()
    }

    fn current(&self) -> &[char] {
        self.tips.get(self.index).map(Vec::as_slice).unwrap_or(&[])
    }

    fn tip_len(&self) -> usize {
        self.current().len()
    }

    /// How long a fully typed tip stays on screen.
    pub fn dwell(&self) -> Duration {
        if self.config.reduced_motion {
            return self.config.min_read;
        }
        let scaled = self.config.min_read + self.config.per_char_read * self.tip_len() as u32;
        scaled.clamp(self.config.min_read, self.config.max_read)
    }

    /// Characters removed per erase step.
    pub fn erase_step(&self) -> usize {
        ((self.tip_len() as f64 * ERASE_FRACTION).ceil() as usize).max(1)
    }

    pub fn erase_interval(&self) -> Duration {
        (self.config.typing * 3 / 4).max(MIN_ERASE_INTERVAL)
    }

    /// Wait before the next [`tick`](Self::tick), or `None` when nothing is scheduled.
    pub fn next_delay(&self) -> Option<Duration> {
        if self.paused || self.finished || self.tips.is_empty() {
            return None;
        }
        Some(match self.phase {
            Phase::Typing => self.config.typing,
            Phase::Reading => self.dwell(),
            Phase::Erasing => self.erase_interval(),
        })
    }

    /// Applies the event [`next_delay`](Self::next_delay) was waiting for.
    pub fn tick(&mut self) {
        if self.next_delay().is_none() {
            return;
        }
        match self.phase {
            Phase::Typing => self.shown += 1,
            Phase::Reading => self.phase = Phase::Erasing,
            Phase::Erasing => self.shown = self.shown.saturating_sub(self.erase_step()),
        }
        self.settle();
    }

    fn start_typing(&mut self) {
        self.shown = 0;
        self.phase = Phase::Typing;
        self.settle();
    }

    fn settle(&mut self) {
        loop {
            match self.phase {
                Phase::Typing => {
                    if self.config.reduced_motion {
                        self.shown = self.tip_len();
                    }
                    if self.shown < self.tip_len() {
                        return;
                    }
                    self.phase = Phase::Reading;
                }
                Phase::Reading => return,
                Phase::Erasing => {
                    if self.config.reduced_motion {
                        self.shown = 0;
                    }
                    if self.shown > 0 {
                        return;
                    }
                    self.advance();
                }
            }
        }
    }

    fn advance(&mut self) {
        let next = self.index + 1;
        if next < self.tips.len() {
            self.index = next;
        } else if self.config.looping {
            self.index = 0;
        } else {
            // Last tip stays fully shown.
            self.shown = self.tip_len();
            self.phase = Phase::Reading;
            self.finished = true;
            debug!("Typewriter finished on tip {}", self.index);
            return;
        }
        self.shown = 0;
        self.phase = Phase::Typing;
    }
}

// Interactive controls, for hosts that drive the machine live rather than
// replaying a script.
#[allow(dead_code)]
impl Typewriter {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// True once a non-looping run has settled on its last tip.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Starts erasing the current tip right away.
    pub fn skip_forward(&mut self) {
        if self.tips.is_empty() {
            return;
        }
        self.finished = false;
        self.phase = Phase::Erasing;
        self.settle();
    }

    /// Jumps to the previous tip (wrapping) and types it from the start.
    pub fn skip_back(&mut self) {
        if self.tips.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.tips.len() - 1
        } else {
            self.index - 1
        };
        self.finished = false;
        self.start_typing();
    }
}

/// Runs the machine on the tokio clock for at most `max_events` ticks,
/// handing every intermediate frame to `render`.
#[allow(dead_code)]
pub async fn drive(
    machine: &mut Typewriter,
    max_events: usize,
    mut render: impl FnMut(&Typewriter),
) {
    render(machine);
    for _ in 0..max_events {
        let Some(delay) = machine.next_delay() else {
            break;
        };
        tokio::time::sleep(delay).await;
        machine.tick();
        render(machine);
    }
}

/// One visible state of the loader and the wait that precedes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub tip: usize,
    pub text: String,
    pub delay_ms: u64,
}

/// Steps the machine through one pass over its tips, recording every frame.
///
/// Stops when the machine finishes, when it comes back round to its starting
/// state (the caller replays the frames in a loop), or after `max_frames`.
pub fn script(machine: &mut Typewriter, max_frames: usize) -> Vec<Frame> {
    let start = (machine.tip_index(), machine.phase(), machine.displayed());
    let mut frames = vec![Frame {
        tip: start.0,
        text: start.2.clone(),
        delay_ms: 0,
    }];

    while frames.len() < max_frames {
        let Some(delay) = machine.next_delay() else {
            break;
        };
        machine.tick();
        let state = (machine.tip_index(), machine.phase(), machine.displayed());
        if state == start {
            break;
        }
        frames.push(Frame {
            tip: state.0,
            text: state.2,
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        });
    }
    frames
}
