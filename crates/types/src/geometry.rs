use serde::{Deserialize, Serialize};

/// An axis-aligned box, in layout points, measured from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    pub fn new(cx: f64, cy: f64, rx: f64, ry: f64) -> Self {
        Self { cx, cy, rx, ry }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Line {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// The geometry of an item. Its shape depends on the kind of item it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bounds {
    Rect(Rect),
    Ellipse(Ellipse),
    Line(Line),
}

impl Bounds {
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Bounds::Rect(rect) => Some(rect),
            _ => None,
        }
    }

    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Bounds::Ellipse(ellipse) => Some(ellipse),
            _ => None,
        }
    }

    pub fn as_line(&self) -> Option<&Line> {
        match self {
            Bounds::Line(line) => Some(line),
            _ => None,
        }
    }
}

impl From<Rect> for Bounds {
    fn from(rect: Rect) -> Self {
        Bounds::Rect(rect)
    }
}

impl From<Ellipse> for Bounds {
    fn from(ellipse: Ellipse) -> Self {
        Bounds::Ellipse(ellipse)
    }
}

impl From<Line> for Bounds {
    fn from(line: Line) -> Self {
        Bounds::Line(line)
    }
}

/// Custom page dimensions, only meaningful for the `"user"` paper type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}
