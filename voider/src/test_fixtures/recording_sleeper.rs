// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::Sleeper;

/// Never blocks; remembers every requested pause instead.
#[derive(Debug, Default, Clone)]
pub struct RecordingSleeper {
    pub sleeps: Vec<Duration>,
}

impl RecordingSleeper {
    pub fn total(&self) -> Duration { self.sleeps.iter().sum() }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&mut self, duration: Duration) { self.sleeps.push(duration); }
}
