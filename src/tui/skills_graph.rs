//! Skills visualization overlay.
//!
//! Ten skill nodes sit at fixed positions in 3D space, every pair joined by a
//! faint line. The camera orbits the scene slowly while the line group spins
//! around the Y axis on its own. Everything is projected with a perspective
//! camera and drawn with Braille dots on a [`Canvas`].

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};
use std::time::Duration;

use crate::models::{RgbColor, SkillNode};
use crate::services::{RevealTrigger, SectionReveal, Transition};

use super::component::{Component, ComponentEvent};
use super::Theme;

/// Camera distance from the origin
pub const CAMERA_DISTANCE: f32 = 10.0;
/// Vertical field of view in degrees
pub const FIELD_OF_VIEW: f32 = 50.0;
/// Spin of the line group, radians per second
pub const LINE_ROTATION_SPEED: f32 = 0.05;
/// Camera orbit speed, radians per second
pub const CAMERA_ORBIT_SPEED: f32 = std::f32::consts::TAU / 120.0;

const LINE_COLOR: RgbColor = RgbColor::new(0x88, 0x84, 0xd8);
const LINE_OPACITY: f32 = 0.2;
const SCENE_BACKGROUND: RgbColor = RgbColor::new(0x1e, 0x29, 0x3b);
const LABEL_COLOR: RgbColor = RgbColor::new(0xcc, 0xcc, 0xcc);
const NODE_RADIUS: f32 = 0.5;

/// Rotates `point` around the Y axis by `angle` radians.
#[must_use]
pub fn rotate_y(point: [f32; 3], angle: f32) -> [f32; 3] {
    let (sin, cos) = angle.sin_cos();
    let [x, y, z] = point;
    [x * cos + z * sin, y, -x * sin + z * cos]
}

/// Projects a world point seen from a camera orbiting at `camera_angle`.
///
/// Returns normalized screen coordinates (`y` in `-1.0..=1.0` for the visible
/// range) and the depth, or `None` for points behind the camera.
#[must_use]
pub fn project(point: [f32; 3], camera_angle: f32) -> Option<(f32, f32, f32)> {
    // Orbiting the camera is the same as turning the world the other way.
    let [x, y, z] = rotate_y(point, -camera_angle);
    let depth = CAMERA_DISTANCE - z;
    if depth <= f32::EPSILON {
        return None;
    }
    let focal = 1.0 / (FIELD_OF_VIEW.to_radians() / 2.0).tan();
    Some((x * focal / depth, y * focal / depth, depth))
}

/// Radius on screen of a node of world radius `radius` at `depth`.
#[must_use]
pub fn projected_radius(radius: f32, depth: f32) -> f32 {
    let focal = 1.0 / (FIELD_OF_VIEW.to_radians() / 2.0).tan();
    radius * focal / depth
}

/// The skills visualization overlay.
#[derive(Debug, Clone)]
pub struct SkillsGraph {
    nodes: Vec<SkillNode>,
    reveal: SectionReveal,
    clock: Duration,
    reduced_motion: bool,
    open: bool,
}

impl SkillsGraph {
    /// Creates a closed overlay for `nodes`.
    #[must_use]
    pub fn new(nodes: Vec<SkillNode>) -> Self {
        Self {
            nodes,
            reveal: SectionReveal::new(RevealTrigger::Repeat),
            clock: Duration::ZERO,
            reduced_motion: false,
            open: false,
        }
    }

    /// Opens the overlay at clock time `now`; the fade restarts every time.
    pub fn open(&mut self, now: Duration) {
        self.open = true;
        self.clock = now;
        self.reveal.observe(1.0, now);
    }

    /// Closes the overlay.
    pub fn close(&mut self, now: Duration) {
        self.open = false;
        self.reveal.observe(0.0, now);
    }

    /// Whether the overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Advances the animation clock.
    pub fn sync(&mut self, clock: Duration, reduced_motion: bool) {
        self.clock = clock;
        self.reduced_motion = reduced_motion;
    }

    /// Current fade-in opacity.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        if self.reduced_motion && self.reveal.state().is_revealed() {
            return 1.0;
        }
        self.reveal.progress(&Transition::SKILLS_GRAPH, self.clock)
    }

    /// Node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of connecting lines: one per node pair.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let n = self.nodes.len();
        n * n.saturating_sub(1) / 2
    }

    fn angles(&self) -> (f32, f32) {
        if self.reduced_motion {
            return (0.0, 0.0);
        }
        let seconds = self.clock.as_secs_f32();
        (seconds * CAMERA_ORBIT_SPEED, seconds * LINE_ROTATION_SPEED)
    }
}

fn scene_color(color: RgbColor, opacity: f32) -> Color {
    SCENE_BACKGROUND.mix(color, opacity).to_ratatui_color()
}

impl Component for SkillsGraph {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('v' | 'q') => {
                self.close(self.clock);
                Some(ComponentEvent::Closed)
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = super::centered_rect(80, 80, area);
        f.render_widget(Clear, area);

        let opacity = self.opacity();
        let (camera, spin) = self.angles();
        // Terminal cells are about twice as tall as wide.
        let aspect = f64::from(area.width.saturating_sub(2))
            / (f64::from(area.height.saturating_sub(2)).max(1.0) * 2.0);

        let block = Block::default()
            .title(Span::styled(
                " Skills Visualization ",
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(Span::styled(
                " Auto-rotating | Esc to close ",
                Style::default().fg(scene_color(LABEL_COLOR, 0.7 * opacity)),
            )))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border));

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(SCENE_BACKGROUND.to_ratatui_color())
            .x_bounds([-aspect, aspect])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                let line_color = scene_color(LINE_COLOR, LINE_OPACITY * opacity * 2.0);
                for (i, from) in self.nodes.iter().enumerate() {
                    for to in &self.nodes[i + 1..] {
                        let a = project(rotate_y(from.position, spin), camera);
                        let b = project(rotate_y(to.position, spin), camera);
                        if let (Some((x1, y1, _)), Some((x2, y2, _))) = (a, b) {
                            ctx.draw(&CanvasLine::new(
                                f64::from(x1),
                                f64::from(y1),
                                f64::from(x2),
                                f64::from(y2),
                                line_color,
                            ));
                        }
                    }
                }
                ctx.layer();

                for node in &self.nodes {
                    let Some((x, y, depth)) = project(node.position, camera) else {
                        continue;
                    };
                    let color = scene_color(node.color, opacity);
                    ctx.draw(&Circle {
                        x: f64::from(x),
                        y: f64::from(y),
                        radius: f64::from(projected_radius(NODE_RADIUS * node.scale, depth)),
                        color,
                    });
                    let label_offset = f64::from(projected_radius(0.8 * node.scale, depth));
                    let half_label = node.name.chars().count() as f64 / 2.0;
                    let cell = aspect * 2.0 / f64::from(area.width.saturating_sub(2)).max(1.0);
                    ctx.print(
                        f64::from(x) - half_label * cell,
                        f64::from(y) - label_offset,
                        Span::styled(
                            node.name.clone(),
                            Style::default().fg(scene_color(LABEL_COLOR, opacity)),
                        ),
                    );
                }
            });

        f.render_widget(canvas, area);
    }

    fn should_close(&self) -> bool {
        !self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Portfolio;
    use crossterm::event::KeyModifiers;

    const EPS: f32 = 1e-4;

    fn graph() -> SkillsGraph {
        SkillsGraph::new(Portfolio::embedded().unwrap().skill_nodes)
    }

    #[test]
    fn test_ten_nodes_fully_connected() {
        let graph = graph();
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 45);
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let [x, y, z] = rotate_y([1.0, 2.0, 0.0], std::f32::consts::FRAC_PI_2);
        assert!(x.abs() < EPS);
        assert!((y - 2.0).abs() < EPS);
        assert!((z + 1.0).abs() < EPS);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let (x, y, depth) = project([0.0, 0.0, 0.0], 0.0).unwrap();
        assert!(x.abs() < EPS && y.abs() < EPS);
        assert!((depth - CAMERA_DISTANCE).abs() < EPS);
    }

    #[test]
    fn test_closer_points_project_larger() {
        let (far_x, _, far) = project([1.0, 0.0, -3.0], 0.0).unwrap();
        let (near_x, _, near) = project([1.0, 0.0, 3.0], 0.0).unwrap();
        assert!(near < far);
        assert!(near_x > far_x);
        assert!(projected_radius(0.5, near) > projected_radius(0.5, far));
    }

    #[test]
    fn test_points_behind_camera_are_dropped() {
        assert!(project([0.0, 0.0, 12.0], 0.0).is_none());
    }

    #[test]
    fn test_fade_restarts_on_every_open() {
        let mut graph = graph();
        assert!(graph.opacity().abs() < EPS);

        graph.open(Duration::from_secs(1));
        graph.sync(Duration::from_secs(5), false);
        assert!((graph.opacity() - 1.0).abs() < EPS);

        graph.close(Duration::from_secs(5));
        assert!(graph.opacity().abs() < EPS);

        graph.open(Duration::from_secs(10));
        assert!(graph.opacity().abs() < EPS, "fade starts over");
    }

    #[test]
    fn test_escape_closes() {
        let mut graph = graph();
        graph.open(Duration::ZERO);
        let event = graph.handle_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(event, Some(ComponentEvent::Closed));
        assert!(graph.should_close());
    }
}
