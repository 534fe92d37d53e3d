//! Character-grid fractal generation.
//!
//! Each cell `(x, y)` of a `width × height` grid is evaluated on a
//! "spacetime curve" `a·x² − b·y² + c·x·y` with fresh stream draws
//! `a, b, c`, then mapped onto an eight-glyph palette. Gravitational
//! lensing flips the row order and reverses each row whose draw exceeds
//! one half.

use crate::StreamSource;

/// Glyphs in palette order.
pub const PALETTE: [char; 8] = ['*', '#', '@', '§', '¶', 'Ξ', 'Ψ', 'Ω'];

/// One rendered grid, top row first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    rows: Vec<String>,
}

impl Frame {
    /// Wraps already-rendered rows.
    pub fn from_rows(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Returns the rows.
    #[inline]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Consumes the frame, returning its rows.
    pub fn into_rows(self) -> Vec<String> {
        self.rows
    }
}

/// Evaluates the curve at `(x, y)`, drawing `a`, `b`, `c` in that order.
pub fn spacetime_curve<S: StreamSource + ?Sized>(stream: &mut S, x: f64, y: f64) -> f64 {
    let a = stream.draw();
    let b = stream.draw();
    let c = stream.draw();
    a * x * x - b * y * y + c * x * y
}

/// Maps a curve value onto the palette.
///
/// The index is `trunc(value · 8)` reduced Euclidean-mod 8, so negative
/// values wrap to the top of the palette.
///
/// ```rust
/// use quantum_art::fractal::glyph_for;
///
/// assert_eq!(glyph_for(0.0), '*');
/// assert_eq!(glyph_for(0.99), 'Ω');
/// assert_eq!(glyph_for(-0.2), 'Ω');
/// ```
pub fn glyph_for(value: f64) -> char {
    let len = PALETTE.len() as i64;
    let index = (value * len as f64) as i64;
    PALETTE[index.rem_euclid(len) as usize]
}

/// Renders a `width × height` grid, row by row, left to right.
///
/// Consumes `3 · width · height` draws.
pub fn singularity_matrix<S: StreamSource + ?Sized>(
    stream: &mut S,
    width: usize,
    height: usize,
) -> Frame {
    let rows = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    let warp = spacetime_curve(
                        stream,
                        x as f64 / width as f64,
                        y as f64 / height as f64,
                    );
                    glyph_for(warp)
                })
                .collect::<String>()
        })
        .collect();
    Frame { rows }
}

/// Reverses row order, then reverses each row whose draw exceeds 0.5.
///
/// Draws one value per row, in the new (bottom-up) row order.
pub fn gravitational_lensing<S: StreamSource + ?Sized>(stream: &mut S, frame: Frame) -> Frame {
    let rows = frame
        .rows
        .into_iter()
        .rev()
        .map(|row| {
            if stream.draw() > 0.5 {
                row.chars().rev().collect()
            } else {
                row
            }
        })
        .collect();
    Frame { rows }
}
