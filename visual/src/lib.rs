#![warn(clippy::all, rust_2018_idioms)]

//! Plotting helpers for scalar functions and homotopy solution paths.
//!
//! Drawing happens on an in-memory [`Axis`]. Figures are rendered as pgfplots
//! documents with [`Figure::write_tex`] or [`Figure::save`].
//!
//! ```no_run
//! use num::complex::Complex64;
//!
//! let mut figure = visual::Figure::new(Default::default());
//! let settings = visual::PlotSettings::default().zero(0.0);
//! visual::plot(|x| x.mapv(f64::cos), -3.0, 3.0, &settings, figure.axis_mut(0))?;
//!
//! let ppath = [0.0, 0.5, 1.0];
//! let xpaths = [[1.0, 0.8, 0.5].map(|t| Complex64::new(t, 1.0 - t))];
//! let homotopy = visual::plot_homotopy(&ppath, &xpaths, &Default::default(), None)?;
//!
//! figure.save("cos", "./figures")?;
//! if let Some(homotopy) = homotopy {
//!     homotopy.save("homotopy", "./figures")?;
//! }
//! # Ok::<(), visual::Error>(())
//! ```

pub mod axis;
mod data;
mod error;
pub mod figure;
mod homotopy;
pub mod palette;
mod plot;

pub use axis::{Aspect, Axis, Layer, Line};
pub use data::HomotopyData;
pub use error::{Error, Result};
pub use figure::{Figure, Size};
pub use homotopy::{plot_homotopy, HomotopySettings};
pub use plot::{plot, sample_grid, try_plot, PlotSettings};
