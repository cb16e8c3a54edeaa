use crate::geometry_utilities::types::*;
use lyon::path::builder::WithSvg;
use lyon::path::path::BuilderImpl;

/// Mutable path builder that curves and paths are emitted into.
///
/// Wraps lyon's SVG-style builder and remembers the current point so callers can
/// tell whether a segment continues the sub path or needs a move first.
pub struct OutlineBuilder {
    builder: WithSvg<BuilderImpl>,
    current: Option<OutlinePoint>,
    first: Option<OutlinePoint>,
}

impl OutlineBuilder {
    pub fn new() -> OutlineBuilder {
        OutlineBuilder {
            builder: lyon::path::Path::svg_builder(),
            current: None,
            first: None,
        }
    }

    /// The point the next segment starts at, `None` before the first move.
    pub fn current_point(&self) -> Option<OutlinePoint> {
        self.current
    }

    pub fn move_to(&mut self, to: OutlinePoint) {
        self.builder.move_to(to.to_untyped());
        self.current = Some(to);
        self.first = Some(to);
    }

    pub fn line_to(&mut self, to: OutlinePoint) {
        self.begin_if_needed(to);
        self.builder.line_to(to.to_untyped());
        self.current = Some(to);
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: OutlinePoint, to: OutlinePoint) {
        self.begin_if_needed(to);
        self.builder.quadratic_bezier_to(ctrl.to_untyped(), to.to_untyped());
        self.current = Some(to);
    }

    pub fn cubic_bezier_to(&mut self, ctrl1: OutlinePoint, ctrl2: OutlinePoint, to: OutlinePoint) {
        self.begin_if_needed(to);
        self.builder
            .cubic_bezier_to(ctrl1.to_untyped(), ctrl2.to_untyped(), to.to_untyped());
        self.current = Some(to);
    }

    pub fn close(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.builder.close();
        self.current = self.first;
    }

    pub fn build(self) -> lyon::path::Path {
        self.builder.build()
    }

    // lyon would silently turn a leading segment into a move, losing it.
    fn begin_if_needed(&mut self, fallback: OutlinePoint) {
        if self.current.is_none() {
            self.move_to(fallback);
        }
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        OutlineBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use euclid::point2;
    use lyon::path::PathEvent;

    #[test]
    fn test_current_point() {
        let mut builder = OutlineBuilder::new();
        assert_eq!(builder.current_point(), None);
        builder.move_to(point2(1.0, 2.0));
        assert_eq!(builder.current_point(), Some(point2(1.0, 2.0)));
        builder.line_to(point2(5.0, 2.0));
        builder.quadratic_bezier_to(point2(6.0, 3.0), point2(5.0, 4.0));
        assert_eq!(builder.current_point(), Some(point2(5.0, 4.0)));
        builder.close();
        assert_eq!(builder.current_point(), Some(point2(1.0, 2.0)));
    }

    #[test]
    fn test_build_events() {
        let mut builder = OutlineBuilder::new();
        builder.move_to(point2(0.0, 0.0));
        builder.line_to(point2(10.0, 0.0));
        builder.cubic_bezier_to(point2(10.0, 5.0), point2(5.0, 10.0), point2(0.0, 10.0));
        builder.close();
        let path = builder.build();

        let events: Vec<PathEvent> = path.iter().collect();
        assert_eq!(events.len(), 4);
        assert!(matches!(events[0], PathEvent::Begin { .. }));
        assert!(matches!(events[1], PathEvent::Line { .. }));
        assert!(matches!(events[2], PathEvent::Cubic { .. }));
        assert!(matches!(events[3], PathEvent::End { close: true, .. }));
    }
}
