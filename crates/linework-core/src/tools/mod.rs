//! Tool system driving interactive curve construction.
//!
//! One pure handler per curve variant consumes pointer clicks against an
//! in-progress curve; the [`ToolManager`] owns that in-progress state and
//! commits finished curves to a [`Drawing`].

use crate::drawing::Drawing;
use crate::geom::{self, Point3};
use crate::shapes::{Circle, Curve, CurveStyle, Line, Polyline};
use crate::status::StatusSink;
use glam::DVec3;
use kurbo::Point;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer click delivered by the host event loop.
#[derive(Debug, Clone, Copy)]
pub struct ClickEvent {
    /// Click position in screen coordinates (origin top-left, y down).
    pub position: Point,
    /// The pressed button.
    pub button: MouseButton,
    /// Height of the drawing surface, used for the screen-to-world flip.
    pub screen_height: f64,
}

/// Result of feeding one click to a construction handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickResult {
    /// A new in-progress curve was created.
    Created,
    /// A point was consumed by the in-progress curve.
    PointHandled,
    /// The curve is complete and ready to commit.
    Finished,
    /// Construction was canceled; nothing to commit.
    Canceled,
}

/// Outcome of one construction step.
#[derive(Debug, Clone)]
pub struct ClickOutcome {
    /// How the click advanced construction.
    pub result: ClickResult,
    /// The updated in-progress curve, if any.
    pub curve: Option<Curve>,
    /// Status prompt for the status-display collaborator.
    pub status: Option<&'static str>,
}

/// Transform a screen click to world coordinates.
///
/// Screen y grows downward; world y grows upward from the bottom edge.
/// World z is always 0 for clicked points.
pub fn screen_to_world(position: Point, screen_height: f64) -> Point3 {
    DVec3::new(position.x, screen_height - position.y, 0.0)
}

/// Advance line construction by one click.
///
/// First non-right click fixes the start point, the second fixes the end
/// point. A right click cancels without altering the curve.
pub fn handle_line_click(
    world: Point3,
    button: MouseButton,
    in_progress: Option<Curve>,
) -> ClickOutcome {
    if button == MouseButton::Right {
        return ClickOutcome {
            result: ClickResult::Canceled,
            curve: in_progress,
            status: None,
        };
    }

    match in_progress {
        Some(Curve::Line(mut line)) => {
            line.end = world;
            ClickOutcome {
                result: ClickResult::Finished,
                curve: Some(Curve::Line(line)),
                status: Some(Line::START_MESSAGE),
            }
        }
        _ => ClickOutcome {
            result: ClickResult::Created,
            curve: Some(Curve::Line(Line::new(world, world))),
            status: Some(Line::END_MESSAGE),
        },
    }
}

/// Advance circle construction by one click.
///
/// First non-right click fixes the center, the second fixes the radius as
/// the distance from the center. A right click cancels without altering the
/// curve.
pub fn handle_circle_click(
    world: Point3,
    button: MouseButton,
    in_progress: Option<Curve>,
) -> ClickOutcome {
    if button == MouseButton::Right {
        return ClickOutcome {
            result: ClickResult::Canceled,
            curve: in_progress,
            status: None,
        };
    }

    match in_progress {
        Some(Curve::Circle(mut circle)) => {
            circle.radius = geom::distance(circle.center, world);
            ClickOutcome {
                result: ClickResult::Finished,
                curve: Some(Curve::Circle(circle)),
                status: Some(Circle::START_MESSAGE),
            }
        }
        _ => ClickOutcome {
            result: ClickResult::Created,
            curve: Some(Curve::Circle(Circle::new(world, DVec3::ZERO, 0.0))),
            status: Some(Circle::END_MESSAGE),
        },
    }
}

/// Advance polyline construction by one click.
///
/// Left clicks accumulate points. A right click cancels while fewer than
/// two points exist, and finishes the polyline otherwise; the finishing
/// click does not contribute a point. Other buttons leave the curve
/// untouched.
pub fn handle_polyline_click(
    world: Point3,
    button: MouseButton,
    in_progress: Option<Curve>,
) -> ClickOutcome {
    match in_progress {
        Some(Curve::Polyline(mut polyline)) => match button {
            MouseButton::Left => {
                polyline.push_point(world);
                ClickOutcome {
                    result: ClickResult::PointHandled,
                    curve: Some(Curve::Polyline(polyline)),
                    status: Some(Polyline::END_MESSAGE),
                }
            }
            MouseButton::Right if polyline.points().len() < 2 => ClickOutcome {
                result: ClickResult::Canceled,
                curve: None,
                status: Some(Polyline::START_MESSAGE),
            },
            MouseButton::Right => ClickOutcome {
                result: ClickResult::Finished,
                curve: Some(Curve::Polyline(polyline)),
                status: Some(Polyline::START_MESSAGE),
            },
            MouseButton::Middle => ClickOutcome {
                result: ClickResult::Canceled,
                curve: Some(Curve::Polyline(polyline)),
                status: None,
            },
        },
        other => match button {
            MouseButton::Left => ClickOutcome {
                result: ClickResult::Created,
                curve: Some(Curve::Polyline(Polyline::new(vec![world]))),
                status: Some(Polyline::NEXT_MESSAGE),
            },
            MouseButton::Right => ClickOutcome {
                result: ClickResult::Canceled,
                curve: None,
                status: Some(Polyline::START_MESSAGE),
            },
            MouseButton::Middle => ClickOutcome {
                result: ClickResult::Canceled,
                curve: other,
                status: None,
            },
        },
    }
}

/// Curve construction tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Line,
    Circle,
    Polyline,
}

impl ToolKind {
    /// The prompt published when this tool becomes active.
    pub fn start_message(self) -> &'static str {
        match self {
            ToolKind::Line => Line::START_MESSAGE,
            ToolKind::Circle => Circle::START_MESSAGE,
            ToolKind::Polyline => Polyline::START_MESSAGE,
        }
    }

    /// Dispatch to the variant's click handler.
    fn handle(self, world: Point3, button: MouseButton, in_progress: Option<Curve>) -> ClickOutcome {
        match self {
            ToolKind::Line => handle_line_click(world, button, in_progress),
            ToolKind::Circle => handle_circle_click(world, button, in_progress),
            ToolKind::Polyline => handle_polyline_click(world, button, in_progress),
        }
    }
}

/// Manages the current tool and the in-progress curve.
///
/// Enforces the caller contract: `Created`/`PointHandled` retain the
/// in-progress curve, `Finished` commits it to the drawing, `Canceled`
/// drops it without committing.
#[derive(Debug, Default)]
pub struct ToolManager {
    /// Currently selected tool, if any.
    current_tool: Option<ToolKind>,
    /// Curve under construction.
    in_progress: Option<Curve>,
    /// Style applied to committed curves.
    pub current_style: CurveStyle,
}

impl ToolManager {
    /// Create a new tool manager with no active tool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the active tool.
    ///
    /// Drops any in-progress construction and publishes the tool's start
    /// prompt.
    pub fn set_tool(&mut self, tool: ToolKind, status: &mut dyn StatusSink) {
        self.current_tool = Some(tool);
        self.in_progress = None;
        status.publish(tool.start_message());
    }

    /// Deactivate construction entirely.
    pub fn clear_tool(&mut self) {
        self.current_tool = None;
        self.in_progress = None;
    }

    /// The currently selected tool, if any.
    pub fn current_tool(&self) -> Option<ToolKind> {
        self.current_tool
    }

    /// The curve under construction, if any.
    pub fn in_progress(&self) -> Option<&Curve> {
        self.in_progress.as_ref()
    }

    /// Check if a construction is in progress.
    pub fn is_active(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Feed one click through the active tool's handler.
    ///
    /// Finished curves receive the manager's current style and are
    /// committed to the drawing. Returns `None` when no tool is selected.
    pub fn handle_click(
        &mut self,
        event: ClickEvent,
        drawing: &mut Drawing,
        status: &mut dyn StatusSink,
    ) -> Option<ClickResult> {
        let tool = self.current_tool?;
        let world = screen_to_world(event.position, event.screen_height);
        let outcome = tool.handle(world, event.button, self.in_progress.take());

        if let Some(message) = outcome.status {
            status.publish(message);
        }

        match outcome.result {
            ClickResult::Created | ClickResult::PointHandled => {
                self.in_progress = outcome.curve;
            }
            ClickResult::Finished => {
                if let Some(mut curve) = outcome.curve {
                    *curve.style_mut() = self.current_style;
                    drawing.add(curve);
                }
            }
            ClickResult::Canceled => {}
        }

        Some(outcome.result)
    }
}
