//! Brush definitions for painting (solid colors, gradients)

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient(Vec<Color>),
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    pub fn linear_gradient(colors: Vec<Color>) -> Self {
        Brush::LinearGradient(colors)
    }

    /// Evenly spaced gradient stop offsets spanning [0, 1], one per color.
    pub fn stops(&self) -> Vec<f32> {
        match self {
            Brush::Solid(_) => vec![0.0],
            Brush::LinearGradient(colors) if colors.len() < 2 => vec![0.0],
            Brush::LinearGradient(colors) => {
                let last = (colors.len() - 1) as f32;
                (0..colors.len()).map(|i| i as f32 / last).collect()
            }
        }
    }
}
