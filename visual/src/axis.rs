use std::ops::Range;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::palette;

/// Fraction of the data extent added on each side when computing limits.
const MARGIN: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Drawn before everything on the main layer.
    Background,
    Main,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aspect {
    #[default]
    Auto,
    Equal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub options: Vec<String>,
    pub coordinates: Vec<(f64, f64)>,
    pub layer: Layer,
}

impl Line {
    pub fn xs(&self) -> Vec<f64> {
        self.coordinates.iter().map(|(x, _)| *x).collect()
    }

    pub fn ys(&self) -> Vec<f64> {
        self.coordinates.iter().map(|(_, y)| *y).collect()
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// A single panel that collects drawn lines until it is rendered.
#[derive(Debug, Clone, Default)]
pub struct Axis {
    lines: Vec<Line>,
    aspect: Aspect,
    xlabel: Option<String>,
    ylabel: Option<String>,
    cycle: usize,
}

impl Axis {
    pub fn new() -> Self {
        Default::default()
    }

    /// Draws the polyline through `(x[i], y[i])`.
    ///
    /// Lines without a color in `options` take the next color of the default
    /// cycle.
    pub fn plot(&mut self, x: &[f64], y: &[f64], options: &[&str]) -> Result<()> {
        if x.len() != y.len() {
            return Err(Error::length_mismatch(x.len(), y.len()));
        }

        let mut options = options.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        if !palette::has_color(&options) {
            options.insert(0, palette::cycle_color(self.cycle).to_owned());
            self.cycle += 1;
        }

        self.lines.push(Line {
            options,
            coordinates: x.iter().copied().zip(y.iter().copied()).collect(),
            layer: Layer::Main,
        });
        Ok(())
    }

    /// Draws a horizontal line at `y` on the background layer.
    pub fn hline(&mut self, y: f64, x_range: Range<f64>, options: &[&str]) {
        self.lines.push(Line {
            options: options.iter().map(|s| s.to_string()).collect(),
            coordinates: vec![(x_range.start, y), (x_range.end, y)],
            layer: Layer::Background,
        });
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn main_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.layer == Layer::Main)
    }

    pub fn background_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines
            .iter()
            .filter(|line| line.layer == Layer::Background)
    }

    /// Lines in rendering order: background first, then main, each in drawing order.
    pub fn ordered_lines(&self) -> impl Iterator<Item = &Line> {
        self.background_lines().chain(self.main_lines())
    }

    pub fn aspect(&self) -> Aspect {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: Aspect) {
        self.aspect = aspect;
    }

    pub fn xlabel(&self) -> Option<&str> {
        self.xlabel.as_deref()
    }

    pub fn ylabel(&self) -> Option<&str> {
        self.ylabel.as_deref()
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) {
        self.xlabel = Some(label.into());
    }

    pub fn set_ylabel(&mut self, label: impl Into<String>) {
        self.ylabel = Some(label.into());
    }

    pub fn xlim(&self) -> Range<f64> {
        padded_limits(self.lines.iter().flat_map(|line| line.xs()))
    }

    pub fn ylim(&self) -> Range<f64> {
        padded_limits(self.lines.iter().flat_map(|line| line.ys()))
    }
}

fn padded_limits(values: impl Iterator<Item = f64>) -> Range<f64> {
    use itertools::MinMaxResult::*;

    let (min, max) = match values.filter(|v| v.is_finite()).minmax_by(f64::total_cmp) {
        NoElements => return 0.0..1.0,
        OneElement(v) => (v, v),
        MinMax(min, max) => (min, max),
    };

    if min == max {
        let delta = if min == 0.0 { MARGIN } else { MARGIN * min.abs() };
        return (min - delta)..(max + delta);
    }

    let pad = MARGIN * (max - min);
    (min - pad)..(max + pad)
}
