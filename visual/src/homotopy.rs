use num::complex::Complex64;

use crate::axis::{Aspect, Axis};
use crate::error::Result;
use crate::figure::{Figure, Size};

pub const REAL_LABEL: &str = "Solution (Real)";
pub const IMAG_LABEL: &str = "Solution (Imaginary)";
pub const PARAMETER_LABEL: &str = "Parameter";

const REFERENCE_OPTIONS: [&str; 3] = ["line width=1pt", "black", "dashed"];

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HomotopySettings {
    /// Dashed reference curve on the real panel, one value per parameter.
    pub rzero: Option<Vec<f64>>,
    /// Dashed reference curve on the imaginary panel.
    pub czero: Option<Vec<f64>>,
    pub equal: bool,
}

impl Default for HomotopySettings {
    fn default() -> Self {
        Self {
            rzero: None,
            czero: None,
            equal: true,
        }
    }
}

/// Draws the real and imaginary parts of every path in `xpaths` against
/// `ppath`, one panel each. The parameter runs along the vertical axis.
///
/// With `axs` set to `None` a new two-panel figure is created and returned.
/// No lengths are checked up front: the first path whose length differs from
/// `ppath` stops drawing with [`Error::LengthMismatch`](crate::Error::LengthMismatch),
/// leaving the curves drawn so far in place.
pub fn plot_homotopy<P>(
    ppath: &[f64],
    xpaths: &[P],
    settings: &HomotopySettings,
    axs: Option<(&mut Axis, &mut Axis)>,
) -> Result<Option<Figure>>
where
    P: AsRef<[Complex64]>,
{
    match axs {
        Some((real, imag)) => {
            draw_homotopy(ppath, xpaths, settings, real, imag)?;
            Ok(None)
        }
        None => {
            let mut figure = Figure::subplots(2, Size::HOMOTOPY);
            let (real, imag) = figure.axes_mut().split_at_mut(1);
            draw_homotopy(ppath, xpaths, settings, &mut real[0], &mut imag[0])?;
            Ok(Some(figure))
        }
    }
}

fn draw_homotopy<P>(
    ppath: &[f64],
    xpaths: &[P],
    settings: &HomotopySettings,
    real: &mut Axis,
    imag: &mut Axis,
) -> Result<()>
where
    P: AsRef<[Complex64]>,
{
    log::debug!(
        "Plotting {} homotopy paths over {} parameter values",
        xpaths.len(),
        ppath.len()
    );

    if let Some(rzero) = &settings.rzero {
        real.plot(rzero, ppath, &REFERENCE_OPTIONS)?;
    }
    if let Some(czero) = &settings.czero {
        imag.plot(czero, ppath, &REFERENCE_OPTIONS)?;
    }

    for xpath in xpaths {
        let (re, im): (Vec<f64>, Vec<f64>) =
            xpath.as_ref().iter().map(|z| (z.re, z.im)).unzip();
        real.plot(&re, ppath, &[])?;
        imag.plot(&im, ppath, &[])?;
    }

    if settings.equal {
        real.set_aspect(Aspect::Equal);
        imag.set_aspect(Aspect::Equal);
    }

    real.set_xlabel(REAL_LABEL);
    imag.set_xlabel(IMAG_LABEL);
    real.set_ylabel(PARAMETER_LABEL);

    Ok(())
}
