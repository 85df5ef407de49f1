use std::{fmt, str::FromStr};

use crate::{
    foundation::core::Rect,
    foundation::error::{MotionError, MotionResult},
};

/// Per-edge adjustment of the viewport used for intersection tests.
///
/// Follows CSS `rootMargin`: positive values grow the viewport outward,
/// negative values shrink it. `"-100px 0px"` trims 100px off the top and the
/// bottom so elements must scroll further in before they count as visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value on top/bottom, zero on the sides.
    pub fn vertical(v: f64) -> Self {
        Self::new(v, 0.0, v, 0.0)
    }

    /// Adjusted root rectangle. May be inverted when the margin shrinks it past zero.
    pub fn apply(self, root: Rect) -> Rect {
        Rect {
            x0: root.x0 - self.left,
            y0: root.y0 - self.top,
            x1: root.x1 + self.right,
            y1: root.y1 + self.bottom,
        }
    }

    /// Parses CSS margin shorthand with one to four `px` (or unitless zero) values.
    pub fn parse(s: &str) -> MotionResult<Self> {
        let values = s
            .split_whitespace()
            .map(parse_length)
            .collect::<MotionResult<Vec<f64>>>()?;
        match values.as_slice() {
            [all] => Ok(Self::new(*all, *all, *all, *all)),
            [v, h] => Ok(Self::new(*v, *h, *v, *h)),
            [t, h, b] => Ok(Self::new(*t, *h, *b, *h)),
            [t, r, b, l] => Ok(Self::new(*t, *r, *b, *l)),
            _ => Err(MotionError::validation(format!(
                "root margin '{s}' must have 1 to 4 values"
            ))),
        }
    }
}

fn parse_length(token: &str) -> MotionResult<f64> {
    if token.ends_with('%') {
        return Err(MotionError::validation(format!(
            "percentage root margins are not supported ('{token}')"
        )));
    }
    let number = token.strip_suffix("px").unwrap_or(token);
    let v: f64 = number
        .parse()
        .map_err(|_| MotionError::validation(format!("invalid root margin length '{token}'")))?;
    if !v.is_finite() {
        return Err(MotionError::validation(format!(
            "root margin length '{token}' must be finite"
        )));
    }
    if v != 0.0 && !token.ends_with("px") {
        return Err(MotionError::validation(format!(
            "root margin length '{token}' needs a px unit"
        )));
    }
    Ok(v)
}

impl FromStr for RootMargin {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RootMargin {
    type Error = MotionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<RootMargin> for String {
    fn from(m: RootMargin) -> Self {
        m.to_string()
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewport/margin.rs"]
mod tests;
