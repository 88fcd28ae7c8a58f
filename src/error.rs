use std::fmt;

#[derive(Debug, Clone)]
pub struct PlotError {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input vectors disagree in length.
    ShapeMismatch,
    /// A value is not a finite number.
    TypeError,
    /// Explicit display order is not a permutation of the distinct categories.
    CategoryOrder,
    /// Color table has fewer rows than distinct color categories.
    ColorIndex,
    /// A configuration field is out of range.
    InvalidConfig,
    /// The drawing backend failed.
    Render,
}

impl PlotError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ShapeMismatch, message)
    }

    pub fn type_err(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::TypeError, message)
    }

    pub fn category_order(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CategoryOrder, message)
    }

    pub fn color_index(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ColorIndex, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidConfig, message)
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Render, message)
    }
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for PlotError {}

pub type PlotResult<T> = Result<T, PlotError>;
