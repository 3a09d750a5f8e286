use std::fs::File;
use std::io::{prelude::*, BufWriter};
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::axis::{Aspect, Axis, Line};
use crate::error::Result;
use crate::palette::DEFAULT_COLORS;

pub const TEX_EXT: &str = "tex";

/// Space between neighbouring panels, in cm.
const PANEL_SEP: f64 = 2.0;

/// Figure size in cm.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const HOMOTOPY: Self = Self {
        width: 25.4,
        height: 10.16,
    };
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: 16.256,
            height: 12.192,
        }
    }
}

/// One or more panels laid out in a single row.
#[derive(Debug, Clone)]
pub struct Figure {
    pub size: Size,
    axes: Vec<Axis>,
}

impl Figure {
    const FILE_START: &'static str = r#"\nonstopmode
\documentclass[10pt,a4paper]{article}
\usepackage{pgfplots}
\pgfplotsset{compat=1.17}
\usepackage[active,tightpage]{preview}
\PreviewEnvironment{tikzpicture}
\setlength\PreviewBorder{0pt}
"#;

    const FILE_BODY: &'static str = r#"\begin{document}
\pagestyle{empty}
\begin{tikzpicture}
"#;

    const FILE_END: &'static str = r#"\end{tikzpicture}
\end{document}
"#;

    pub fn new(size: Size) -> Self {
        Self::subplots(1, size)
    }

    /// A row of `ncols` empty panels sharing `size`.
    ///
    /// A figure always has at least one panel, so `ncols == 0` gives the same
    /// figure as [`Figure::new`].
    pub fn subplots(ncols: usize, size: Size) -> Self {
        Self {
            size,
            axes: (0..ncols.max(1)).map(|_| Axis::new()).collect(),
        }
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axes_mut(&mut self) -> &mut [Axis] {
        &mut self.axes
    }

    pub fn axis(&self, index: usize) -> Option<&Axis> {
        self.axes.get(index)
    }

    pub fn axis_mut(&mut self, index: usize) -> Option<&mut Axis> {
        self.axes.get_mut(index)
    }

    fn panel_size(&self) -> (f64, f64) {
        let n = self.axes.len() as f64;
        let width = (self.size.width - PANEL_SEP * (n - 1.0)) / n;
        (width.max(1.0), self.size.height)
    }

    pub fn write_tex<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(Self::FILE_START.as_bytes())?;
        for (name, hex) in DEFAULT_COLORS {
            writeln!(writer, "\\definecolor{{{name}}}{{HTML}}{{{hex}}}")?;
        }
        writer.write_all(Self::FILE_BODY.as_bytes())?;

        let (width, height) = self.panel_size();
        for (i, axis) in self.axes.iter().enumerate() {
            let x_offset = i as f64 * (width + PANEL_SEP);
            write_axis(writer, axis, x_offset, width, height)?;
        }

        writer.write_all(Self::FILE_END.as_bytes())?;
        Ok(())
    }

    /// Writes `<output_dir>/<name>.tex` and returns its path.
    pub fn save(&self, name: &str, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        let mut path = PathBuf::from(output_dir.as_ref()).join(name);
        path.set_extension(TEX_EXT);

        log::info!("[{name}]: Creating file {}", path.to_string_lossy());

        let mut writer = BufWriter::new(File::create(&path)?);
        self.write_tex(&mut writer)?;
        writer.flush()?;

        Ok(path)
    }
}

fn escape_label(label: &str) -> String {
    label.replace(['{', '}'], "")
}

fn write_axis<W: Write>(
    writer: &mut W,
    axis: &Axis,
    x_offset: f64,
    width: f64,
    height: f64,
) -> Result<()> {
    let xlim = axis.xlim();
    let ylim = axis.ylim();
    let (x_min, x_max) = (xlim.start, xlim.end);
    let (y_min, y_max) = (ylim.start, ylim.end);

    let mut options = vec![
        format!("at={{({x_offset:.3}cm,0cm)}}"),
        "scale only axis".to_owned(),
        format!("width={width:.3}cm"),
        format!("height={height:.3}cm"),
        format!("xmin={x_min:.5},xmax={x_max:.5},ymin={y_min:.5},ymax={y_max:.5}"),
    ];
    if let Some(label) = axis.xlabel() {
        options.push(format!("xlabel={{{}}}", escape_label(label)));
    }
    if let Some(label) = axis.ylabel() {
        options.push(format!("ylabel={{{}}}", escape_label(label)));
    }
    if axis.aspect() == Aspect::Equal {
        options.push("axis equal image".to_owned());
    }

    writeln!(writer, "\\begin{{axis}}[{}]", options.join(","))?;
    for line in axis.ordered_lines() {
        write_line(writer, line)?;
    }
    writeln!(writer, "\\end{{axis}}")?;
    Ok(())
}

fn format_coordinates(line: &Line) -> Vec<String> {
    line.coordinates
        .iter()
        .map(|(x, y)| format!("({x:.5},{y:.5})"))
        .dedup()
        .collect()
}

fn write_line<W: Write>(writer: &mut W, line: &Line) -> Result<()> {
    let coordinates = format_coordinates(line);

    if !coordinates.is_empty() {
        writeln!(
            writer,
            "\\addplot [{}] coordinates {{ {} }};",
            line.options.join(","),
            coordinates.join(" ")
        )?;
    }
    Ok(())
}
