//! Native function bindings.
//!
//! The driver is the host: it registers the turtle primitives and the
//! basic I/O functions with the evaluator. Script code reaches them
//! through the normal call syntax.

use std::cell::RefCell;
use std::rc::Rc;

use logo2_eval::{EvalResult, Exit, Interpreter, RuntimeErrorKind, Value};
use logo2_turtle::{Turtle, TurtleState};

/// Extracts a numeric argument as `f32`.
fn number(value: &Value) -> Result<f32, Exit> {
    value
        .as_real()
        .map(|v| v as f32)
        .ok_or_else(|| RuntimeErrorKind::TypeMismatch.into())
}

/// Extracts an integer argument in `0..=255`.
fn byte(value: &Value) -> Result<u8, Exit> {
    value
        .as_integer()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| RuntimeErrorKind::TypeMismatch.into())
}

/// Registers the turtle primitives, `print`/`println`, and `quit`.
pub fn register_defaults(interp: &mut Interpreter, turtle: &Rc<RefCell<Turtle>>) {
    let t = Rc::clone(turtle);
    interp.add_native_function("fd", 1, move |_, args| {
        t.borrow_mut().forward(number(&args[0])?);
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    interp.add_native_function("bk", 1, move |_, args| {
        t.borrow_mut().back(number(&args[0])?);
        Ok(Value::Null)
    });

    // heading grows clockwise in the renderer's y-down coordinate space
    let t = Rc::clone(turtle);
    interp.add_native_function("rt", 1, move |_, args| {
        t.borrow_mut().rotate(number(&args[0])?);
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    interp.add_native_function("lt", 1, move |_, args| {
        t.borrow_mut().rotate(-number(&args[0])?);
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    interp.add_native_function("penup", 0, move |_, _| {
        t.borrow_mut().penup();
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    interp.add_native_function("pendown", 0, move |_, _| {
        t.borrow_mut().pendown();
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    interp.add_native_function("pencolor", 4, move |_, args| {
        let (r, g, b, a) = (
            byte(&args[0])?,
            byte(&args[1])?,
            byte(&args[2])?,
            byte(&args[3])?,
        );
        t.borrow_mut().set_pen_color(r, g, b, a);
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    interp.add_native_function("penwidth", 1, move |_, args| {
        t.borrow_mut().set_pen_width(number(&args[0])?);
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    interp.add_native_function("step", 1, move |_, args| {
        t.borrow_mut().set_step(number(&args[0])?);
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    interp.add_native_function("radians", 1, move |_, args| {
        let mode = match &args[0] {
            Value::Boolean(true) => logo2_turtle::AngleMode::Radians,
            Value::Boolean(false) => logo2_turtle::AngleMode::Degrees,
            _ => return Err(RuntimeErrorKind::TypeMismatch.into()),
        };
        t.borrow_mut().set_angle_mode(mode);
        Ok(Value::Null)
    });

    // save/restore work a pose stack on the host side
    let poses: Rc<RefCell<Vec<TurtleState>>> = Rc::new(RefCell::new(Vec::new()));

    let t = Rc::clone(turtle);
    let stack = Rc::clone(&poses);
    interp.add_native_function("save", 0, move |_, _| {
        stack.borrow_mut().push(t.borrow().save());
        Ok(Value::Null)
    });

    let t = Rc::clone(turtle);
    let stack = Rc::clone(&poses);
    interp.add_native_function("restore", 0, move |_, _| {
        if let Some(pose) = stack.borrow_mut().pop() {
            t.borrow_mut().restore(pose);
        }
        Ok(Value::Null)
    });

    interp.add_native_function("print", 1, |_, args| {
        print!("{}", args[0]);
        Ok(Value::Null)
    });

    interp.add_native_function("println", 1, |_, args| {
        println!("{}", args[0]);
        Ok(Value::Null)
    });

    interp.add_native_function("quit", 1, |_, args| -> EvalResult {
        let code = args[0]
            .as_integer()
            .ok_or_else(|| Exit::from(RuntimeErrorKind::TypeMismatch))?;
        Err(Exit::Quit(code as i32))
    });
}
