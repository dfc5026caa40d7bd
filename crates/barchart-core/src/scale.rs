// File: crates/barchart-core/src/scale.rs
// Summary: Category (band) and magnitude (linear) scales mapping data to pixels.

use std::collections::HashMap;

use d3rs::scale::Scale as D3Scale;

/// Operations shared by the category and magnitude scales.
pub trait Scale {
    type Input: ?Sized;
    /// Pixel position for `input`, or `None` when it lies outside the domain.
    fn apply(&self, input: &Self::Input) -> Option<f64>;
    /// Output range as `(start, end)`.
    fn range(&self) -> (f64, f64);
}

/// Half-up rounding, matching how pixel boundaries are snapped by the host.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Discrete scale splitting a pixel range into evenly spaced bands, one per label.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    index: HashMap<String, usize>,
    r0: f64,
    r1: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
    round: bool,
    // derived
    step: f64,
    bandwidth: f64,
    positions: Vec<f64>,
}

impl Default for BandScale {
    fn default() -> Self { Self::new() }
}

impl BandScale {
    pub fn new() -> Self {
        let mut s = Self {
            domain: Vec::new(),
            index: HashMap::new(),
            r0: 0.0,
            r1: 1.0,
            padding_inner: 0.0,
            padding_outer: 0.0,
            align: 0.5,
            round: false,
            step: 0.0,
            bandwidth: 0.0,
            positions: Vec::new(),
        };
        s.rescale();
        s
    }

    /// Set the domain; repeated labels keep their first position.
    pub fn domain<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain.clear();
        self.index.clear();
        for label in labels {
            let label = label.into();
            if !self.index.contains_key(&label) {
                self.index.insert(label.clone(), self.domain.len());
                self.domain.push(label);
            }
        }
        self.rescale();
        self
    }

    pub fn range(mut self, r0: f64, r1: f64) -> Self {
        self.r0 = r0;
        self.r1 = r1;
        self.rescale();
        self
    }

    /// Set range and snap band starts and widths to whole pixels.
    pub fn range_round(mut self, r0: f64, r1: f64) -> Self {
        self.round = true;
        self.range(r0, r1)
    }

    /// Inner and outer padding, as a fraction of the step.
    pub fn padding(mut self, p: f64) -> Self {
        self.padding_inner = p.min(1.0);
        self.padding_outer = p;
        self.rescale();
        self
    }

    pub fn labels(&self) -> &[String] { &self.domain }
    pub fn bandwidth(&self) -> f64 { self.bandwidth }
    pub fn step(&self) -> f64 { self.step }
    pub fn is_round(&self) -> bool { self.round }

    fn rescale(&mut self) {
        let n = self.domain.len() as f64;
        let reverse = self.r1 < self.r0;
        let (mut start, stop) = if reverse { (self.r1, self.r0) } else { (self.r0, self.r1) };
        let mut step = (stop - start) / (n - self.padding_inner + self.padding_outer * 2.0).max(1.0);
        if self.round {
            step = step.floor();
        }
        start += (stop - start - step * (n - self.padding_inner)) * self.align;
        let mut bandwidth = step * (1.0 - self.padding_inner);
        if self.round {
            start = round_half_up(start);
            bandwidth = round_half_up(bandwidth);
        }
        let mut positions: Vec<f64> = (0..self.domain.len()).map(|i| start + step * i as f64).collect();
        if reverse {
            positions.reverse();
        }
        self.step = step;
        self.bandwidth = bandwidth;
        self.positions = positions;
    }
}

impl Scale for BandScale {
    type Input = str;

    fn apply(&self, label: &str) -> Option<f64> {
        self.index.get(label).and_then(|&i| self.positions.get(i).copied())
    }

    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}

/// Continuous scale mapping `[d0, d1]` linearly onto `[r0, r1]`.
///
/// Interpolation and tick generation come from `d3rs`; this wrapper only
/// pins the degenerate domains the chart can produce (empty or all-NaN data).
#[derive(Clone)]
pub struct LinearScale {
    inner: d3rs::scale::LinearScale,
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl Default for LinearScale {
    fn default() -> Self { Self::new() }
}

impl std::fmt::Debug for LinearScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LinearScale")
            .field("domain", &(self.d0, self.d1))
            .field("range", &(self.r0, self.r1))
            .finish()
    }
}

impl PartialEq for LinearScale {
    fn eq(&self, other: &Self) -> bool {
        (self.d0, self.d1, self.r0, self.r1) == (other.d0, other.d1, other.r0, other.r1)
    }
}

impl LinearScale {
    pub fn new() -> Self {
        Self::build(0.0, 1.0, 0.0, 1.0)
    }

    fn build(d0: f64, d1: f64, r0: f64, r1: f64) -> Self {
        let inner = d3rs::scale::LinearScale::new().domain(d0, d1).range(r0, r1);
        Self { inner, d0, d1, r0, r1 }
    }

    pub fn domain(self, d0: f64, d1: f64) -> Self {
        Self::build(d0, d1, self.r0, self.r1)
    }

    pub fn range(self, r0: f64, r1: f64) -> Self {
        Self::build(self.d0, self.d1, r0, r1)
    }

    /// Domain as `(d0, d1)`.
    pub fn extent(&self) -> (f64, f64) { (self.d0, self.d1) }

    /// Map `v` into the range. A zero-width domain maps everything to the
    /// middle of the range; NaN anywhere yields NaN.
    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span.is_nan() || v.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            (self.r0 + self.r1) / 2.0
        } else {
            self.inner.scale(v)
        }
    }

    /// Roughly `count` round-valued ticks (1, 2 or 5 times a power of ten)
    /// covering the domain. Empty when the domain is not finite.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 || !self.d0.is_finite() || !self.d1.is_finite() {
            return Vec::new();
        }
        if self.d0 == self.d1 {
            return vec![self.d0];
        }
        self.inner.ticks(count)
    }
}

impl Scale for LinearScale {
    type Input = f64;

    fn apply(&self, v: &f64) -> Option<f64> {
        let px = self.to_px(*v);
        if px.is_nan() { None } else { Some(px) }
    }

    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
}
