use std::convert::Infallible;

use ndarray::Array1;

use crate::axis::Axis;
use crate::error::{Error, Result};
use crate::figure::{Figure, Size};

pub const DEFAULT_SAMPLES: usize = 100;

/// Style of the dashed reference line drawn by [`plot`].
pub const ZERO_LINE_OPTIONS: [&str; 3] = ["black", "dashed", "line width=1pt"];

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    /// Number of evenly spaced sample points.
    pub samples: usize,
    /// Height of an optional dashed reference line.
    pub zero: Option<f64>,
    /// pgfplots style keys passed unchanged to the curve.
    pub options: Vec<String>,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            zero: None,
            options: vec![],
        }
    }
}

impl PlotSettings {
    pub fn samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    pub fn zero(mut self, zero: f64) -> Self {
        self.zero = Some(zero);
        self
    }

    pub fn option(mut self, option: impl Into<String>) -> Self {
        self.options.push(option.into());
        self
    }
}

/// `samples` evenly spaced points from `x0` to `x1`, both included.
pub fn sample_grid(x0: f64, x1: f64, samples: usize) -> Array1<f64> {
    Array1::linspace(x0, x1, samples)
}

/// Plots `f` over `[x0, x1]`.
///
/// `f` is called once with the whole sample grid. When `ax` is `None` a new
/// single-panel figure is created and returned; otherwise the curve is added to
/// `ax` and `None` is returned.
pub fn plot<F>(
    f: F,
    x0: f64,
    x1: f64,
    settings: &PlotSettings,
    ax: Option<&mut Axis>,
) -> Result<Option<Figure>>
where
    F: FnOnce(&Array1<f64>) -> Array1<f64>,
{
    try_plot(|x| Ok::<_, Infallible>(f(x)), x0, x1, settings, ax)
}

/// Like [`plot`], for functions that can fail. Errors from `f` are returned as
/// [`Error::Evaluation`] before anything is drawn.
pub fn try_plot<F, E>(
    f: F,
    x0: f64,
    x1: f64,
    settings: &PlotSettings,
    ax: Option<&mut Axis>,
) -> Result<Option<Figure>>
where
    F: FnOnce(&Array1<f64>) -> std::result::Result<Array1<f64>, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    match ax {
        Some(ax) => {
            draw_function(f, x0, x1, settings, ax)?;
            Ok(None)
        }
        None => {
            let mut figure = Figure::new(Size::default());
            draw_function(f, x0, x1, settings, &mut figure.axes_mut()[0])?;
            Ok(Some(figure))
        }
    }
}

fn draw_function<F, E>(
    f: F,
    x0: f64,
    x1: f64,
    settings: &PlotSettings,
    ax: &mut Axis,
) -> Result<()>
where
    F: FnOnce(&Array1<f64>) -> std::result::Result<Array1<f64>, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    log::debug!(
        "Plotting function with {} samples on [{x0}, {x1}]",
        settings.samples
    );

    let x = sample_grid(x0, x1, settings.samples);
    let y = f(&x).map_err(|err| Error::Evaluation(err.into()))?;

    let options = settings
        .options
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>();
    ax.plot(&x.to_vec(), &y.to_vec(), &options)?;

    if let Some(zero) = settings.zero {
        let xlim = ax.xlim();
        ax.hline(zero, xlim, &ZERO_LINE_OPTIONS);
    }

    Ok(())
}
