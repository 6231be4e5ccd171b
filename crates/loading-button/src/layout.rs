//! Measurement constraints and size negotiation.
//!
//! The host's layout pass communicates with the widget through
//! [`MeasureSpec`] constraints, one per axis. The widget resolves each
//! constraint against a minimum using the standard three-mode policy:
//! exact wins outright, at-most clamps, unspecified yields the minimum.
//!
//! [`SizeHint`] and [`SizePolicy`] are the complementary vocabulary for
//! hosts that negotiate from the widget's side instead.

use loading_button_render::Size;

/// A size constraint handed down by the host's layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasureSpec {
    /// The widget must be exactly this size.
    Exactly(f32),
    /// The widget may be any size up to this limit.
    AtMost(f32),
    /// The host imposes no constraint.
    Unspecified,
}

impl MeasureSpec {
    /// Resolve this constraint against a desired minimum size.
    pub fn resolve(self, minimum: f32) -> f32 {
        match self {
            Self::Exactly(size) => size,
            Self::AtMost(size) => minimum.min(size),
            Self::Unspecified => minimum,
        }
    }
}

/// Interior padding around the widget's content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    /// Uniform padding on all four sides.
    pub fn uniform(amount: f32) -> Self {
        Self {
            left: amount,
            top: amount,
            right: amount,
            bottom: amount,
        }
    }

    /// Total horizontal padding.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Size policy determines how a widget behaves when space is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizePolicy {
    /// The widget stays at its size hint.
    Fixed,
    /// The size hint is preferred but the widget can grow and shrink.
    #[default]
    Preferred,
    /// The widget wants as much space as it can get.
    Expanding,
}

/// Combined horizontal and vertical size policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizePolicyPair {
    pub horizontal: SizePolicy,
    pub vertical: SizePolicy,
}

impl SizePolicyPair {
    /// Create a policy pair.
    pub fn new(horizontal: SizePolicy, vertical: SizePolicy) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Preferred and minimum sizes reported by a widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeHint {
    /// The size the widget displays best at.
    pub preferred: Size,
    /// The smallest acceptable size, if any.
    pub minimum: Option<Size>,
}

impl SizeHint {
    /// Create a size hint with the given preferred dimensions.
    pub fn from_dimensions(width: f32, height: f32) -> Self {
        Self {
            preferred: Size::new(width, height),
            minimum: None,
        }
    }

    /// Set the minimum dimensions.
    pub fn with_minimum_dimensions(mut self, width: f32, height: f32) -> Self {
        self.minimum = Some(Size::new(width, height));
        self
    }
}
