use crate::{
    math::{point::Point, FloatNum},
    shape::BoundaryCurve,
    trajectory::{CircularCorridor, Corridor, LinearCorridor, RobotPath},
};

/// stroke color handed to the drawing surface
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    // obstacle corridor boundaries
    Green,
    // robot path
    Blue,
}

/// drawing surface, owns everything about pixels
pub trait Renderer {
    fn draw_segment(&mut self, start_point: &Point, end_point: &Point, color: Color);

    /// outline only
    fn draw_circle(&mut self, center: &Point, radius: FloatNum, color: Color);
}

pub trait Render {
    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R);
}

fn render_boundary<R: Renderer + ?Sized>(curve: &BoundaryCurve, renderer: &mut R, color: Color) {
    match curve {
        BoundaryCurve::Segment(segment) => {
            renderer.draw_segment(&segment.start_point(), &segment.end_point(), color)
        }
        BoundaryCurve::Circle(circle) => {
            renderer.draw_circle(&circle.center(), circle.radius(), color)
        }
    }
}

impl Render for LinearCorridor {
    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_boundary(&BoundaryCurve::from(self.boundary1()), renderer, Color::Green);
        render_boundary(&BoundaryCurve::from(self.boundary2()), renderer, Color::Green);
    }
}

impl Render for CircularCorridor {
    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        render_boundary(&BoundaryCurve::from(self.boundary1()), renderer, Color::Green);
        render_boundary(&BoundaryCurve::from(self.boundary2()), renderer, Color::Green);
    }
}

impl Render for Corridor {
    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            Self::Linear(corridor) => corridor.render(renderer),
            Self::Circular(corridor) => corridor.render(renderer),
        }
    }
}

impl Render for RobotPath {
    fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        let circle = self.circle();
        renderer.draw_circle(&circle.center(), circle.radius(), Color::Blue);
    }
}
