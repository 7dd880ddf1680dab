/// Canonical single-value rendering.
///
/// Flat values render on one line. Non-empty containers render as a block:
/// the opening bracket, one `key: value` line per present key indented one
/// level deeper than the block, and the closing bracket at the block's own
/// indent. Empty containers render as `[]` or `{}`. The implicit array length
/// is not a key, so it never appears.
///
/// The output is deterministic: structurally equal inputs render identically
/// whether or not they share handles.
use crate::error::{DiffError, Side};
use crate::guard::{Segment, Trail};
use crate::value::{Container, Function, Key, Value};

// ---------------------------------------------------------------------------
// RenderOptions
// ---------------------------------------------------------------------------

/// Layout settings shared by [`render_with`] and [`crate::render_diff_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces added per nesting level. Default: 2.
    pub indent_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl RenderOptions {
    /// The whitespace added per nesting level.
    pub(crate) fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Renders `value` with default options at indent zero.
///
/// # Errors
///
/// Returns [`DiffError::CyclicValue`] if `value` contains itself.
pub fn render(value: &Value) -> Result<String, DiffError> {
    render_with(value, &RenderOptions::default())
}

/// Renders `value` with the given options at indent zero.
///
/// # Errors
///
/// Returns [`DiffError::CyclicValue`] if `value` contains itself.
pub fn render_with(value: &Value, options: &RenderOptions) -> Result<String, DiffError> {
    render_indented(value, "", options)
}

/// Renders `value` as if it started on a line indented by `indent`.
///
/// The first line carries no indent (the caller has already written it);
/// property lines and the closing bracket are indented relative to `indent`.
///
/// # Errors
///
/// Returns [`DiffError::CyclicValue`] if `value` contains itself.
pub fn render_indented(
    value: &Value,
    indent: &str,
    options: &RenderOptions,
) -> Result<String, DiffError> {
    Renderer::new(options, Side::Value).render(value, indent)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

pub(crate) struct Renderer {
    unit: String,
    trail: Trail,
}

impl Renderer {
    /// `side` labels any cycle error with the input being rendered.
    pub(crate) fn new(options: &RenderOptions, side: Side) -> Self {
        Self {
            unit: options.indent_unit(),
            trail: Trail::new(side),
        }
    }

    pub(crate) fn render(&mut self, value: &Value, indent: &str) -> Result<String, DiffError> {
        match value {
            Value::Undefined => Ok("undefined".to_owned()),
            Value::Null => Ok("null".to_owned()),
            Value::Boolean(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(render_number(*n)),
            Value::String(s) => Ok(render_string(s)),
            Value::Function(f) => Ok(render_function(f)),
            Value::Container(c) => self.render_container(c, indent),
        }
    }

    fn render_container(&mut self, container: &Container, indent: &str) -> Result<String, DiffError> {
        let snapshot = container.snapshot();
        let (open, close) = snapshot.kind.brackets();
        if snapshot.properties.is_empty() {
            return Ok(format!("{open}{close}"));
        }

        self.trail.enter(container)?;
        let inner = format!("{indent}{}", self.unit);
        let mut out = String::new();
        out.push(open);
        for (key, value) in &snapshot.properties {
            self.trail.push(Segment::Key(key.clone()));
            let body = self.render(value, &inner)?;
            self.trail.pop();
            push_property(&mut out, &inner, key, &body);
        }
        out.push('\n');
        out.push_str(indent);
        out.push(close);
        self.trail.leave(container);
        Ok(out)
    }
}

/// Appends `"\n" + indent + key + ": " + body`.
pub(crate) fn push_property(out: &mut String, indent: &str, key: &Key, body: &str) {
    out.push('\n');
    out.push_str(indent);
    out.push_str(&key.to_string());
    out.push_str(": ");
    out.push_str(body);
}

// ---------------------------------------------------------------------------
// Flat renderings
// ---------------------------------------------------------------------------

/// `NaN`, `Infinity`, `-Infinity`, `0` for both zeros, and otherwise the
/// shortest round-trip digits: plain decimal while the decimal exponent is
/// in `-7..21`, exponent form (`1e+21`, `5e-324`) outside it.
pub(crate) fn render_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_owned()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_owned()
        } else {
            "-Infinity".to_owned()
        }
    } else if n == 0.0 {
        "0".to_owned()
    } else {
        let scientific = format!("{n:e}");
        let Some((mantissa, exponent)) = scientific.split_once('e') else {
            return n.to_string();
        };
        match exponent.parse::<i32>() {
            Ok(exp) if exp >= 21 => format!("{mantissa}e+{exp}"),
            Ok(exp) if exp < -6 => format!("{mantissa}e{exp}"),
            Ok(_) | Err(_) => n.to_string(),
        }
    }
}

/// Double-quoted with JSON escapes for quotes, backslashes, and control
/// characters.
pub(crate) fn render_string(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

pub(crate) fn render_function(f: &Function) -> String {
    format!("{}()", f.name().unwrap_or("<anon>"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
