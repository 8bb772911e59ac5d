//! Timer-driven state behind the decorative widgets. The components only
//! schedule ticks; all of the arithmetic lives here.

use std::f64::consts::PI;

pub const FRAMES_PER_SECOND: f64 = 60.0;

/// Milliseconds between counter frames. The interval timer only takes whole
/// milliseconds, so this truncates and ticks land at about 60 fps.
pub const FRAME_MS: u64 = (1000.0 / FRAMES_PER_SECOND) as u64;

/// Counts from `from` to `to` over a fixed number of frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counter {
    from: f64,
    to: f64,
    frames: u32,
    frame: u32,
    decimals: u8,
}

impl Counter {
    pub fn new(from: f64, to: f64, duration_secs: f64, decimals: u8) -> Self {
        let frames = (duration_secs * FRAMES_PER_SECOND).floor().max(1.0) as u32;
        Self {
            from,
            to,
            frames,
            frame: 0,
            decimals,
        }
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn is_done(&self) -> bool {
        self.frame >= self.frames
    }

    /// Value shown at `frame`, truncated to the counter's precision. The last
    /// frame lands exactly on `to`.
    pub fn value_at(&self, frame: u32) -> f64 {
        if frame >= self.frames {
            return self.to;
        }
        let step = (self.to - self.from) / self.frames as f64;
        let raw = self.from + step * frame as f64;
        let scale = 10f64.powi(self.decimals as i32);
        (raw * scale).floor() / scale
    }

    pub fn value(&self) -> f64 {
        self.value_at(self.frame)
    }

    pub fn tick(&mut self) -> f64 {
        if !self.is_done() {
            self.frame += 1;
        }
        self.value()
    }

    pub fn display(&self) -> String {
        format!("{:.*}", self.decimals as usize, self.value())
    }
}

/// Reveals a string one character at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    text: String,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.text.chars().count()
    }

    /// Shows one more character. Returns `false` once everything is visible.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown += 1;
        true
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

/// SVG geometry of a circular progress indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub size: f64,
    pub stroke: f64,
}

impl Ring {
    pub fn center(&self) -> f64 {
        self.size / 2.0
    }

    pub fn radius(&self) -> f64 {
        (self.size - self.stroke) / 2.0
    }

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius()
    }

    /// Stroke dash offset leaving `percentage` of the ring drawn.
    pub fn dash_offset(&self, percentage: f64) -> f64 {
        let pct = percentage.clamp(0.0, 100.0);
        let c = self.circumference();
        c - c * pct / 100.0
    }
}

/// Low-discrepancy sequence in `[0, 1)`. Decorative particles are placed with
/// this instead of a RNG so that server and browser render the same markup.
pub fn scatter(index: usize, salt: u32) -> f64 {
    const GOLDEN: f64 = 0.618_033_988_749_895;
    (index as f64 * GOLDEN + salt as f64 * 0.137).fract()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal offset from the center, in percent of the viewport.
    pub dx: f64,
    pub delay_secs: f64,
    pub rotate_deg: f64,
}

pub fn confetti(count: usize) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|i| ConfettiPiece {
            dx: scatter(i, 1) * 100.0 - 50.0,
            delay_secs: scatter(i, 2) * 0.2,
            rotate_deg: scatter(i, 3) * 360.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval_is_close_to_60_fps() {
        let fps = 1000.0 / FRAME_MS as f64;
        assert!((fps - FRAMES_PER_SECOND).abs() < 3.0, "ticks at {fps} fps");
    }

    #[test]
    fn test_counter_frames() {
        assert_eq!(Counter::new(0.0, 100.0, 2.0, 0).frames(), 120);
        // never zero frames
        assert_eq!(Counter::new(0.0, 5.0, 0.0, 0).frames(), 1);
    }

    #[test]
    fn test_counter_runs_to_target() {
        let mut counter = Counter::new(0.0, 50.0, 2.0, 0);
        assert_eq!(counter.value(), 0.0);
        let mut last = 0.0;
        while !counter.is_done() {
            let v = counter.tick();
            assert!(v >= last, "counter went backwards: {v} < {last}");
            assert_eq!(v, v.floor());
            last = v;
        }
        assert_eq!(counter.value(), 50.0);
        assert_eq!(counter.display(), "50");
        // extra ticks stay put
        assert_eq!(counter.tick(), 50.0);
    }

    #[test]
    fn test_counter_with_decimals() {
        let mut counter = Counter::new(0.0, 1.3, 1.0, 1);
        assert_eq!(counter.value_at(30), 0.6);
        for _ in 0..counter.frames() {
            counter.tick();
        }
        assert_eq!(counter.display(), "1.3");
    }

    #[test]
    fn test_typewriter_reveals_prefixes() {
        let text = "Hi, I'm Sandeep";
        let mut tw = Typewriter::new(text);
        assert_eq!(tw.visible(), "");
        let mut steps = 0;
        while tw.tick() {
            steps += 1;
            assert!(text.starts_with(tw.visible()));
            assert_eq!(tw.visible().chars().count(), steps);
        }
        assert_eq!(steps, text.chars().count());
        assert_eq!(tw.visible(), text);
        assert!(!tw.tick());
    }

    #[test]
    fn test_typewriter_handles_multibyte() {
        let mut tw = Typewriter::new("héllo ✨");
        tw.tick();
        tw.tick();
        assert_eq!(tw.visible(), "hé");
        while tw.tick() {}
        assert_eq!(tw.visible(), "héllo ✨");
    }

    #[test]
    fn test_ring_geometry() {
        let ring = Ring {
            size: 120.0,
            stroke: 8.0,
        };
        assert_eq!(ring.radius(), 56.0);
        assert!((ring.circumference() - 2.0 * PI * 56.0).abs() < 1e-9);
        assert!((ring.dash_offset(0.0) - ring.circumference()).abs() < 1e-9);
        assert!(ring.dash_offset(100.0).abs() < 1e-9);
        assert!((ring.dash_offset(75.0) - ring.circumference() * 0.25).abs() < 1e-9);
        // out of range clamps
        assert_eq!(ring.dash_offset(150.0), ring.dash_offset(100.0));
    }

    #[test]
    fn test_confetti_is_deterministic_and_bounded() {
        let a = confetti(30);
        let b = confetti(30);
        assert_eq!(a, b);
        assert_eq!(a.len(), 30);
        for piece in a {
            assert!((-50.0..50.0).contains(&piece.dx));
            assert!((0.0..0.2).contains(&piece.delay_secs));
            assert!((0.0..360.0).contains(&piece.rotate_deg));
        }
    }
}
