//! Scrolling tech-stack ticker for the about grid.

/// Ticks per one-cell advance (~32ms).
const STEP_TICKS: u64 = 2;

#[derive(Debug, Clone)]
pub struct Marquee {
    items: Vec<String>,
    offset: usize,
    last_step_tick: u64,
}

impl Marquee {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            offset: 0,
            last_step_tick: 0,
        }
    }

    /// Advance one cell when due. Returns whether the strip moved.
    pub fn update(&mut self, current_tick: u64) -> bool {
        if self.items.is_empty() {
            return false;
        }
        if current_tick.saturating_sub(self.last_step_tick) < STEP_TICKS {
            return false;
        }
        self.last_step_tick = current_tick;
        self.offset = (self.offset + 1) % self.strip().chars().count().max(1);
        true
    }

    /// The repeating strip: items joined by separators.
    fn strip(&self) -> String {
        self.items
            .iter()
            .map(|item| format!(" {} ·", item))
            .collect::<String>()
    }

    /// A `width`-wide window into the strip at the current offset,
    /// wrapping around its end.
    pub fn window(&self, width: usize) -> String {
        let strip: Vec<char> = self.strip().chars().collect();
        if strip.is_empty() {
            return String::new();
        }
        (0..width)
            .map(|i| strip[(self.offset + i) % strip.len()])
            .collect()
    }
}
