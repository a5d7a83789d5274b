// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{thread, time::Duration};

/// Pacing between frames. The only place where `voider` suspends.
pub trait Sleeper {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
