//! Drifting dot field with proximity links, nudged by page scrolling.

use rand::Rng;

use crate::config::DotFieldParams;

/// Largest vertical nudge (px) a scroll can give a dot
const MAX_NUDGE: f64 = 32.0;
const NUDGE_GAIN: f64 = 1.2;
const NUDGE_FOLLOW: f64 = 0.18;
const SPRING_BACK: f64 = 0.92;
const VERTICAL_BOUNCE: f64 = 0.7;
const LINK_OPACITY: f64 = 0.32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub r: f64,
    /// Transient vertical displacement from scrolling
    pub offset_y: f64,
}

impl Dot {
    /// Drawn vertical position
    pub fn drawn_y(&self) -> f64 {
        self.y + self.offset_y
    }
}

/// Line between two nearby dots
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub opacity: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DotField {
    params: DotFieldParams,
    dots: Vec<Dot>,
}

impl DotField {
    pub fn new(params: DotFieldParams) -> Self {
        Self::with_rng(params, &mut rand::rng())
    }

    pub fn with_rng<R: Rng>(params: DotFieldParams, rng: &mut R) -> Self {
        let dots = (0..params.count)
            .map(|_| Dot {
                x: rng.random::<f64>() * params.width,
                y: rng.random::<f64>() * params.height,
                vx: (rng.random::<f64>() - 0.5) * params.speed,
                vy: (rng.random::<f64>() - 0.5) * params.speed,
                r: 3.5 + rng.random::<f64>() * 2.5,
                offset_y: 0.0,
            })
            .collect();
        Self { params, dots }
    }

    pub fn params(&self) -> &DotFieldParams {
        &self.params
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// SVG viewBox matching the field size
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.params.width, self.params.height)
    }

    /// Advance one frame. `scroll_velocity` is the scroll delta (px) since
    /// the previous frame; dots are pushed against it and spring back.
    pub fn step(&mut self, scroll_velocity: f64) {
        let nudge = (-scroll_velocity * NUDGE_GAIN).clamp(-MAX_NUDGE, MAX_NUDGE);
        let (width, height) = (self.params.width, self.params.height);

        for dot in &mut self.dots {
            dot.offset_y += (nudge - dot.offset_y) * NUDGE_FOLLOW;
            dot.offset_y *= SPRING_BACK;
            dot.x += dot.vx;
            dot.y += dot.vy;
            if dot.x < 0.0 || dot.x > width {
                dot.vx = -dot.vx;
            }
            if dot.y < 0.0 || dot.y > height {
                dot.vy = -dot.vy * VERTICAL_BOUNCE;
            }
            dot.x = dot.x.clamp(0.0, width);
            dot.y = dot.y.clamp(0.0, height);
        }
    }

    /// Links between every pair of dots closer than the line distance.
    /// Closer pairs get more opaque, thicker lines.
    pub fn links(&self) -> Vec<Link> {
        let max = self.params.line_distance;
        let mut links = Vec::new();
        for (i, a) in self.dots.iter().enumerate() {
            for b in &self.dots[i + 1..] {
                let dx = a.x - b.x;
                let dy = a.drawn_y() - b.drawn_y();
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < max {
                    let closeness = 1.0 - dist / max;
                    links.push(Link {
                        x1: a.x,
                        y1: a.drawn_y(),
                        x2: b.x,
                        y2: b.drawn_y(),
                        opacity: LINK_OPACITY * closeness,
                        width: 2.2 + 1.2 * closeness,
                    });
                }
            }
        }
        links
    }
}
