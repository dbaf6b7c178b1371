//! The per-tick paint, flush, wait and erase cycle.

use chrono::Timelike;
use tokei_core::{HourHandMode, LineSegment, PixelColor, PixelSink};
use tokei_raster::{draw_line, polar_segment};

use crate::face::draw_tick_marks;
use crate::geometry::FaceGeometry;
use crate::hands::{Hand, HandAngles};

/// What the driver has to do after [`Ticker::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Hands were painted; push the frame to the display.
    Flush,
    /// Hold the frame for one tick interval.
    Wait,
    /// Hands were erased; advance again to paint the next frame.
    Erased,
}

/// Observable phase of a [`Ticker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Painted,
    Waiting,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Idle,
    Painted([LineSegment; 3]),
    Waiting([LineSegment; 3]),
}

/// Drives the hands through `Idle -> Painted -> Waiting -> Idle`.
///
/// The segments painted in one cycle are cached and erased verbatim, so no
/// stale cells survive even if the geometry math would round differently a
/// second time.
#[derive(Debug)]
pub struct Ticker {
    geometry: FaceGeometry,
    mode: HourHandMode,
    state: State,
}

impl Ticker {
    pub fn new(geometry: FaceGeometry, mode: HourHandMode) -> Self {
        Self {
            geometry,
            mode,
            state: State::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Idle => Phase::Idle,
            State::Painted(_) => Phase::Painted,
            State::Waiting(_) => Phase::Waiting,
        }
    }

    pub fn geometry(&self) -> &FaceGeometry {
        &self.geometry
    }

    /// Move to the next phase, drawing through `sink` as needed.
    ///
    /// `now` is only read when leaving `Idle`.
    pub fn advance<S, T>(&mut self, sink: &mut S, now: &T) -> Step
    where
        S: PixelSink + ?Sized,
        T: Timelike,
    {
        let (next, step) = match self.state {
            State::Idle => {
                let segments = self.segments(HandAngles::at(now, self.mode));
                draw_tick_marks(sink, &self.geometry);
                paint(sink, PixelColor::On, &segments);
                (State::Painted(segments), Step::Flush)
            }
            State::Painted(segments) => (State::Waiting(segments), Step::Wait),
            State::Waiting(segments) => {
                paint(sink, PixelColor::Off, &segments);
                (State::Idle, Step::Erased)
            }
        };
        log::trace!("ticker {:?} -> {:?}", self.phase(), step);
        self.state = next;
        step
    }

    /// Forget any painted hands and switch to a new geometry.
    ///
    /// Call after the surface was cleared, e.g. on resize. Cached segments
    /// from the old layout are dropped without being erased.
    pub fn reset(&mut self, geometry: FaceGeometry) {
        self.geometry = geometry;
        self.state = State::Idle;
    }

    fn segments(&self, angles: HandAngles) -> [LineSegment; 3] {
        Hand::ALL.map(|hand| polar_segment(&hand.spec(&self.geometry, angles.get(hand))))
    }
}

fn paint<S>(sink: &mut S, color: PixelColor, segments: &[LineSegment])
where
    S: PixelSink + ?Sized,
{
    for segment in segments {
        draw_line(sink, color, segment.start, segment.end);
    }
}
