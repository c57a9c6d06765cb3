//! Pan waveform generator.
//!
//! Maps a sample counter to a pan fraction in `[0, 1]`: the share of the
//! signal sent to the left (first interleaved) channel, with the rest going
//! right. A fraction of 1 is hard left. The waveform is a
//! sine over one period, optionally bent toward a square wave: `smoothing`
//! inserts a dwell (plateau) of that fraction of each half cycle at the
//! full-left and full-right extremes, and the ramps in between speed up so
//! the cycle length stays the same.
//!
//! ```text
//! smoothing = 0      smoothing = 0.25     smoothing = 0.5
//!    .-.               .---.               .-----.
//!   /   \             /     \              |     |
//!  '     '-'         '       '---'         '     '-----'
//! ```

use core::f32::consts::TAU;

/// Per-block waveform constants.
///
/// Built once per block from the current smoothing and width, then evaluated
/// for every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanShape {
    /// Ramp slope `1 / (1 - 2 * smoothing)`
    slope: f32,
    /// Start of the plateau within each half cycle
    plateau_start: f32,
    smoothing: f32,
    width: f32,
}

/// One evaluation of the pan waveform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanPoint {
    /// Quarter of the cycle the phase falls in (0..=3 within one period).
    pub quarter: u32,
    /// Position on the underlying sine, in cycles.
    pub angle_fraction: f32,
    /// `sin(2π · angle_fraction) · width`, in `[-width, width]`.
    pub sinusoid: f32,
    /// Unramped pan fraction `(sinusoid + 1) / 2` (left share).
    pub target: f32,
}

impl PanShape {
    /// Shape for the given smoothing (`[0, 0.5]`) and width (`[0, 1]`).
    ///
    /// Smoothing of exactly 0.5 turns the ramps into vertical edges; the
    /// slope is pinned to 1 there instead of dividing by zero.
    pub fn new(smoothing: f32, width: f32) -> Self {
        let slope = if smoothing == 0.5 {
            1.0
        } else {
            1.0 / (1.0 - 2.0 * smoothing)
        };
        Self {
            slope,
            plateau_start: (0.5 - smoothing) / 2.0,
            smoothing,
            width,
        }
    }

    /// Ramp slope applied to the un-dwelled phase.
    #[inline]
    pub fn slope(&self) -> f32 {
        self.slope
    }

    /// Smoothing this shape was built with.
    #[inline]
    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    /// Width this shape was built with.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns `true` if `period_fraction` lies strictly inside a plateau.
    #[inline]
    pub fn is_plateau(&self, period_fraction: f32) -> bool {
        let in_step = libm::fmodf(period_fraction, 0.5);
        in_step > self.plateau_start && in_step < self.plateau_start + self.smoothing
    }

    /// Position on the sine (in cycles) for a position in the period.
    ///
    /// Plateaus sit at the sine's extremes, a quarter and three quarters of
    /// the way round. Outside them the dwell time already spent is
    /// subtracted and the remainder is stretched by the slope.
    #[inline]
    pub fn angle_fraction(&self, period_fraction: f32) -> f32 {
        let quarter = quarter_of(period_fraction);
        if self.is_plateau(period_fraction) {
            return if quarter < 2.0 { 0.25 } else { 0.75 };
        }
        let dwell_so_far = libm::floorf((quarter + 1.0) / 2.0) * self.smoothing;
        (period_fraction - dwell_so_far) * self.slope
    }

    /// Evaluate the waveform at `phase` samples into a cycle of `period`
    /// samples.
    ///
    /// A period of zero (or one so small the division overflows) has no
    /// meaningful position; it evaluates as the start of a cycle.
    #[inline]
    pub fn evaluate(&self, phase: u64, period: f32) -> PanPoint {
        let period_fraction = phase as f32 / period;
        let period_fraction = if period_fraction.is_finite() {
            period_fraction
        } else {
            0.0
        };
        let angle_fraction = self.angle_fraction(period_fraction);
        let sinusoid = if angle_fraction.is_finite() {
            libm::sinf(TAU * angle_fraction) * self.width
        } else {
            0.0
        };
        PanPoint {
            quarter: quarter_of(period_fraction) as u32,
            angle_fraction,
            sinusoid,
            target: (sinusoid + 1.0) / 2.0,
        }
    }
}

impl Default for PanShape {
    /// Pure sine at zero width (a constant centre pan).
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// `floor(period_fraction * 4)`, kept in `f32` so later arithmetic on it
/// cannot overflow.
#[inline]
fn quarter_of(period_fraction: f32) -> f32 {
    libm::floorf(period_fraction * 4.0)
}
