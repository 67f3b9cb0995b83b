//! logo2-turtle - Turtle graphics runtime
//!
//! A [`Turtle`] is a 2D cursor with a pose (position and heading) and a
//! pen. Motion with the pen down emits [`TurtleCommand`]s into an ordered
//! buffer, and optionally into a live [`CommandSink`] for incremental
//! rendering. The turtle has no drawing dependency; the external renderer
//! supplies the sink.
//!
//! # Example
//!
//! ```
//! use logo2_turtle::{Turtle, TurtleCommand};
//!
//! let mut turtle = Turtle::new();
//! turtle.forward(100.0);
//! turtle.rotate(90.0);
//! turtle.forward(100.0);
//!
//! let lines = turtle
//!     .commands()
//!     .iter()
//!     .filter(|c| matches!(c, TurtleCommand::DrawLine { .. }))
//!     .count();
//! assert_eq!(lines, 2);
//! ```

use std::f32::consts::PI;

/// A point in the turtle's coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The turtle's pose. Heading is unbounded; conversion to radians happens
/// at use according to the angle mode.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TurtleState {
    pub x: f32,
    pub y: f32,
    pub heading: f32,
}

/// Pen state: whether motion draws, and with what color and width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PenState {
    pub down: bool,
    /// Packed RGBA, `(r << 24) | (g << 16) | (b << 8) | a`.
    pub color: u32,
    pub width: f32,
}

impl Default for PenState {
    fn default() -> Self {
        Self {
            down: true,
            color: 0x0000_00FF,
            width: 1.0,
        }
    }
}

/// How rotation angles are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

/// A drawing command emitted by turtle motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleCommand {
    DrawLine { from: Point2D, to: Point2D },
    SetColor(u32),
    SetWidth(f32),
}

/// Receiver of emitted commands, implemented by the external renderer.
///
/// Commands arrive synchronously, in program order, together with the
/// emitting turtle (whose pose is already updated).
pub trait CommandSink {
    fn add_command(&mut self, turtle: &Turtle, cmd: &TurtleCommand);
}

/// The turtle.
pub struct Turtle {
    state: TurtleState,
    pen: PenState,
    /// Motion scale; strictly positive.
    step: f32,
    angle_mode: AngleMode,
    commands: Vec<TurtleCommand>,
    notify: Option<Box<dyn CommandSink>>,
}

impl Turtle {
    /// Creates a turtle at the origin, heading 0, pen down, step 1.
    pub fn new() -> Self {
        Self {
            state: TurtleState::default(),
            pen: PenState::default(),
            step: 1.0,
            angle_mode: AngleMode::Degrees,
            commands: Vec::new(),
            notify: None,
        }
    }

    /// Attaches a live sink; every emitted command is forwarded to it.
    pub fn set_notify(&mut self, sink: Box<dyn CommandSink>) {
        self.notify = Some(sink);
    }

    /// Moves forward by `amount` (scaled by the step), drawing if the pen
    /// is down.
    pub fn forward(&mut self, amount: f32) {
        let from = self.save();
        let rad = self.to_rad(self.state.heading);
        self.state.x += rad.cos() * amount * self.step;
        self.state.y += rad.sin() * amount * self.step;
        if self.pen.down {
            self.emit(TurtleCommand::DrawLine {
                from: Point2D::new(from.x, from.y),
                to: Point2D::new(self.state.x, self.state.y),
            });
        }
    }

    /// Moves backward; equivalent to `forward(-amount)`.
    pub fn back(&mut self, amount: f32) {
        self.forward(-amount);
    }

    /// Turns by `angle` in the current angle mode.
    pub fn rotate(&mut self, angle: f32) {
        self.state.heading += angle;
    }

    /// Raises the pen; subsequent motion stops emitting lines.
    pub fn penup(&mut self) {
        self.pen.down = false;
    }

    /// Lowers the pen.
    pub fn pendown(&mut self) {
        self.pen.down = true;
    }

    pub fn is_penup(&self) -> bool {
        !self.pen.down
    }

    /// Sets the pen color and emits the corresponding command.
    pub fn set_pen_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        let color =
            ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32);
        self.pen.color = color;
        self.emit(TurtleCommand::SetColor(color));
    }

    /// Sets the pen width and emits the corresponding command.
    pub fn set_pen_width(&mut self, width: f32) {
        self.pen.width = width;
        self.emit(TurtleCommand::SetWidth(width));
    }

    pub fn pen(&self) -> PenState {
        self.pen
    }

    /// Sets the motion scale; non-positive values are ignored.
    pub fn set_step(&mut self, step: f32) {
        if step > 0.0 {
            self.step = step;
        }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        self.angle_mode = mode;
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    /// Captures the current pose.
    pub fn save(&self) -> TurtleState {
        self.state
    }

    /// Restores a previously captured pose (pen state is untouched).
    pub fn restore(&mut self, state: TurtleState) {
        self.state = state;
    }

    /// The ordered commands emitted so far.
    pub fn commands(&self) -> &[TurtleCommand] {
        &self.commands
    }

    fn emit(&mut self, cmd: TurtleCommand) {
        self.commands.push(cmd);
        // the sink is detached for the call so it can see the turtle
        if let Some(mut notify) = self.notify.take() {
            notify.add_command(self, &cmd);
            self.notify = Some(notify);
        }
    }

    fn to_rad(&self, angle: f32) -> f32 {
        match self.angle_mode {
            AngleMode::Radians => angle,
            AngleMode::Degrees => angle * PI / 180.0,
        }
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}
