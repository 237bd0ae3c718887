// Loading-screen helpers. The typewriter is a clock-free state machine; the
// caller decides whether it runs on a tokio timer, a UI frame loop, or replays
// a precomputed script.

pub mod handlers;
pub mod typewriter;
