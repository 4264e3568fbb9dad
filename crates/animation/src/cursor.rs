use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc,
};

pub const START_OFFSET: i32 = 100;
pub const MAX_OFFSET: i32 = 250;
pub const STEP: i32 = 10;

/// Horizontal text offset, always within `START_OFFSET..=MAX_OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetCursor {
    x: i32,
}

impl Default for OffsetCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl OffsetCursor {
    pub fn new() -> Self {
        Self { x: START_OFFSET }
    }

    pub fn at(x: i32) -> Self {
        Self {
            x: x.clamp(START_OFFSET, MAX_OFFSET),
        }
    }

    pub fn value(self) -> i32 {
        self.x
    }

    pub fn advance(&mut self) -> i32 {
        self.x = next_offset(self.x);
        self.x
    }
}

/// Offset following `x`: back to the start once the bound is reached, otherwise one step right.
pub fn next_offset(x: i32) -> i32 {
    if x >= MAX_OFFSET {
        START_OFFSET
    } else {
        x + STEP
    }
}

/// Offset written by the animation worker and read by the paint pass.
///
/// Relaxed ordering: a paint that observes the previous tick's value is harmless.
#[derive(Debug, Clone)]
pub struct SharedOffset {
    x: Arc<AtomicI32>,
}

impl Default for SharedOffset {
    fn default() -> Self {
        Self::new(OffsetCursor::new())
    }
}

impl SharedOffset {
    pub fn new(cursor: OffsetCursor) -> Self {
        Self {
            x: Arc::new(AtomicI32::new(cursor.value())),
        }
    }

    pub fn get(&self) -> i32 {
        self.x.load(Ordering::Relaxed)
    }

    pub fn advance(&self) -> i32 {
        let previous = match self
            .x
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |x| Some(next_offset(x)))
        {
            Ok(previous) | Err(previous) => previous,
        };
        next_offset(previous)
    }
}
