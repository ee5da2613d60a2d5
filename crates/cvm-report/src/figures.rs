//! The five figure groupings and their SVG rendering.

use crate::error::ReportError;
use cvm_core::{Field, Sweep};
use plotters::prelude::*;
use std::ops::Range;
use tracing::debug;

const FIGURE_SIZE: (u32, u32) = (960, 640);

/// Line colours, matching the classic single-letter plot colour codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Blue,
    Green,
    Magenta,
    Cyan,
    Yellow,
    Black,
}

impl SeriesColor {
    pub fn name(self) -> &'static str {
        match self {
            SeriesColor::Blue => "blue",
            SeriesColor::Green => "green",
            SeriesColor::Magenta => "magenta",
            SeriesColor::Cyan => "cyan",
            SeriesColor::Yellow => "yellow",
            SeriesColor::Black => "black",
        }
    }

    pub fn rgb(self) -> RGBColor {
        match self {
            SeriesColor::Blue => RGBColor(31, 119, 180),
            SeriesColor::Green => RGBColor(0, 128, 0),
            SeriesColor::Magenta => RGBColor(191, 0, 191),
            SeriesColor::Cyan => RGBColor(0, 191, 191),
            SeriesColor::Yellow => RGBColor(191, 191, 0),
            SeriesColor::Black => RGBColor(0, 0, 0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSpec {
    pub field: Field,
    pub color: SeriesColor,
    /// What the curve shows, completed with its colour in the legend.
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FigureSpec {
    pub id: u8,
    pub title: &'static str,
    pub series: Vec<SeriesSpec>,
}

impl FigureSpec {
    pub fn fields(&self) -> Vec<Field> {
        self.series.iter().map(|s| s.field).collect()
    }

    /// Console legend, one sentence per series. Figure 5 also states the
    /// coefficients and the sign convention of the interaction term.
    pub fn legend(&self, sweep: &Sweep) -> String {
        let mut lines = Vec::new();
        if self.fields().contains(&Field::InteractionEnthalpy) {
            let c = sweep.coefficients();
            lines.push(format!(
                "  Epsilon0 is   {:.2}  and epsilon1 is  {:.2}",
                c.eps0, c.eps1
            ));
            lines.push("  Note that the interaction energy is the NEGATIVE of epsilon1*x*x.".into());
        }
        for s in &self.series {
            lines.push(format!("  The {} is in {}.", s.description, s.color.name()));
        }
        lines.join("\n")
    }
}

fn series(field: Field, color: SeriesColor, description: &'static str) -> SeriesSpec {
    SeriesSpec {
        field,
        color,
        description,
    }
}

/// Figure groupings kept stable for comparison with earlier results.
pub fn figures() -> Vec<FigureSpec> {
    use SeriesColor::*;
    vec![
        FigureSpec {
            id: 1,
            title: "Single-site, pair and triplet negative entropies",
            series: vec![
                series(Field::NegX, Blue, "negative x-entropy"),
                series(Field::NegY, Green, "negative y-entropy"),
                series(Field::NegZ, Magenta, "negative z-entropy"),
            ],
        },
        FigureSpec {
            id: 2,
            title: "Aggregate and total negative entropies",
            series: vec![
                series(Field::NegYW, Cyan, "combined W and doubled Y negative entropy"),
                series(Field::NegXZ, Yellow, "combined X and doubled Z negative entropy"),
                series(Field::NegTot, Black, "negative total entropy"),
            ],
        },
        FigureSpec {
            id: 3,
            title: "Single-site versus total negative entropy",
            series: vec![
                series(Field::NegX, Blue, "negative x-entropy"),
                series(Field::NegTot, Black, "negative total entropy"),
            ],
        },
        FigureSpec {
            id: 4,
            title: "Single-site negative entropy",
            series: vec![series(Field::NegX, Blue, "negative x-entropy")],
        },
        FigureSpec {
            id: 5,
            title: "Simple Ising free energy",
            series: vec![
                series(Field::NegX, Blue, "negative x-entropy"),
                series(Field::ActivationEnthalpy, Magenta, "activation enthalpy"),
                series(Field::InteractionEnthalpy, Green, "interaction enthalpy"),
                series(Field::FreeEnergy, Black, "free energy"),
            ],
        },
    ]
}

/// Plots every series of `figure` against x into an SVG document held in
/// memory.
pub fn render_svg(sweep: &Sweep, figure: &FigureSpec) -> Result<String, ReportError> {
    let mut svg = String::new();
    draw(&mut svg, sweep, figure).map_err(|e| ReportError::Plot {
        figure: figure.id,
        reason: e.to_string(),
    })?;
    debug!(figure = figure.id, bytes = svg.len(), "rendered figure");
    Ok(svg)
}

fn draw(
    svg: &mut String,
    sweep: &Sweep,
    figure: &FigureSpec,
) -> Result<(), Box<dyn std::error::Error>> {
    let xs = sweep.field(Field::X);
    let x_range = padded(xs.iter().copied());
    let y_range = padded(
        figure
            .series
            .iter()
            .flat_map(|s| sweep.field(s.field).iter().copied()),
    );

    let root = SVGBackend::with_string(svg, FIGURE_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Figure {}: {}", figure.id, figure.title), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh().x_desc("x").draw()?;

    for s in &figure.series {
        let color = s.color.rgb();
        let points = xs
            .iter()
            .copied()
            .zip(sweep.field(s.field).iter().copied())
            .collect::<Vec<(f64, f64)>>();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(s.field.name())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn padded(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let span = hi - lo;
    if span <= f64::EPSILON {
        return (lo - 0.5)..(hi + 0.5);
    }
    (lo - 0.05 * span)..(hi + 0.05 * span)
}
