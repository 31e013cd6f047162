//! Per-frame drawing of the epicycle chain and the wave trace.
//!
//! The frame routine talks to a [`Surface`], which only knows circles,
//! segments and polylines relative to a movable origin. [`DrawList`] records
//! those primitives so they can be painted into an `egui_plot` plot (or
//! inspected by tests).

use std::f64::consts::TAU;

use egui::Color32;
use egui_plot::{Line, PlotPoints};

use crate::color_scheme::EpicyclePalette;
use crate::config::FeatureFlags;
use crate::data::animation::AnimationState;
use crate::data::epicycle::compute_for;
use crate::data::wave::Amplitudes;
use crate::error::EngineError;

/// Target of the frame routine. Coordinates are relative to the current origin.
pub trait Surface {
    /// Circle outline of the given diameter.
    fn circle(&mut self, center: [f64; 2], diameter: f64, color: Color32);
    fn segment(&mut self, from: [f64; 2], to: [f64; 2], color: Color32);
    fn polyline(&mut self, points: Vec<[f64; 2]>, color: Color32);
    /// Move the origin by `(dx, dy)`.
    fn translate(&mut self, dx: f64, dy: f64);
}

/// A drawing primitive in absolute plot coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Circle {
        center: [f64; 2],
        diameter: f64,
        color: Color32,
    },
    Segment {
        from: [f64; 2],
        to: [f64; 2],
        color: Color32,
    },
    Polyline {
        points: Vec<[f64; 2]>,
        color: Color32,
    },
}

/// Surface that records primitives with the origin offset already applied.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    origin: [f64; 2],
    primitives: Vec<Primitive>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn origin(&self) -> [f64; 2] {
        self.origin
    }

    fn offset(&self, p: [f64; 2]) -> [f64; 2] {
        [p[0] + self.origin[0], p[1] + self.origin[1]]
    }

    /// Emit every recorded primitive as a line into the plot.
    pub fn paint(&self, plot_ui: &mut egui_plot::PlotUi, circle_segments: usize, width: f32) {
        for prim in &self.primitives {
            let (points, color) = match prim {
                Primitive::Circle {
                    center,
                    diameter,
                    color,
                } => (circle_points(*center, *diameter, circle_segments), *color),
                Primitive::Segment { from, to, color } => (vec![*from, *to], *color),
                Primitive::Polyline { points, color } => {
                    if points.len() < 2 {
                        continue;
                    }
                    (points.clone(), *color)
                }
            };
            plot_ui.line(
                Line::new("", PlotPoints::from(points))
                    .color(color)
                    .width(width),
            );
        }
    }
}

impl Surface for DrawList {
    fn circle(&mut self, center: [f64; 2], diameter: f64, color: Color32) {
        let center = self.offset(center);
        self.primitives.push(Primitive::Circle {
            center,
            diameter,
            color,
        });
    }

    fn segment(&mut self, from: [f64; 2], to: [f64; 2], color: Color32) {
        let (from, to) = (self.offset(from), self.offset(to));
        self.primitives.push(Primitive::Segment { from, to, color });
    }

    fn polyline(&mut self, points: Vec<[f64; 2]>, color: Color32) {
        let points = points.into_iter().map(|p| self.offset(p)).collect();
        self.primitives.push(Primitive::Polyline { points, color });
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.origin[0] += dx;
        self.origin[1] += dy;
    }
}

/// Closed outline of a circle sampled with `segments` chords.
pub fn circle_points(center: [f64; 2], diameter: f64, segments: usize) -> Vec<[f64; 2]> {
    let segments = segments.max(3);
    let r = diameter / 2.0;
    (0..=segments)
        .map(|k| {
            let a = TAU * k as f64 / segments as f64;
            [center[0] + r * a.cos(), center[1] + r * a.sin()]
        })
        .collect()
}

/// Placement and styling of one frame.
#[derive(Clone, Debug)]
pub struct FrameLayout {
    /// Horizontal distance from the epicycle origin to the wave origin.
    pub wave_offset: f64,
    pub palette: EpicyclePalette,
    pub features: FeatureFlags,
}

/// Run one animation frame against `surface`.
///
/// Draws every term's circle and radius line, then the segment from the
/// chain tip to the current head of the trace, then records the tip's y in
/// the trace and draws the trace. Finally the phase is advanced. Nothing is
/// drawn or mutated if the engine rejects the parameters. While paused the
/// frame is redrawn without touching the trace or the phase.
///
/// Returns the chain's endpoint.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    state: &mut AnimationState,
    amplitudes: &Amplitudes,
    layout: &FrameLayout,
) -> Result<[f64; 2], EngineError> {
    let epicycles = compute_for(&state.params, state.phase, amplitudes)?;
    let palette = &layout.palette;

    for term in &epicycles.terms {
        if layout.features.circles {
            surface.circle(term.center, term.diameter(), palette.circle);
        }
        if layout.features.radii {
            surface.segment(term.center, term.tip, palette.radius);
        }
    }

    let [x, y] = epicycles.endpoint;
    surface.translate(layout.wave_offset, 0.0);

    if layout.features.connector {
        // Before the first push the trace is empty; the head is the sample about to be pushed.
        let head = state.trace.front().unwrap_or(y);
        surface.segment([x - layout.wave_offset, y], [0.0, head], palette.connector);
    }

    if !state.paused {
        state.trace.push(y);
    }

    if layout.features.wave {
        surface.polyline(state.trace.points(), palette.wave);
    }

    surface.translate(-layout.wave_offset, 0.0);
    state.advance();

    Ok(epicycles.endpoint)
}
