use tracing::{trace, trace_span};

use crate::{face::Face, orientation::Orientation, rotation::Rotate90};

/// How a face label is spelled in rendered output
#[derive(PartialEq, Eq, Clone, Copy, Default, Debug)]
pub enum Notation {
    /// `West`
    #[default]
    Bare,
    /// `Face::West`, ready to paste into Rust source
    Path,
}

impl Notation {
    pub fn token(&self, face: Face) -> String {
        match self {
            Self::Bare => face.name().to_string(),
            Self::Path => format!("Face::{}", face.name()),
        }
    }
}

/// Bracketed comma-joined list of labels, e.g. `[West,Down,North,South,Up,East]`
pub fn render_faces(faces: &[Face], notation: Notation) -> String {
    bracket(faces.iter().map(|&face| notation.token(face)))
}

fn bracket(items: impl IntoIterator<Item = String>) -> String {
    format!("[{}]", items.into_iter().collect::<Vec<_>>().join(","))
}

/// Orientations for every pair of X and Y quarter turns, indexed `[x][y]`
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct FaceTable {
    rows: [[Orientation; 4]; 4],
}

impl FaceTable {
    pub const SIZE: usize = 4;

    /// Builds a table by calling `f` with the X and Y turn counts of each cell
    pub fn build(mut f: impl FnMut(usize, usize) -> Orientation) -> Self {
        let mut rows = [[Orientation::IDENTITY; 4]; 4];
        for (rx, row) in rows.iter_mut().enumerate() {
            for (ry, cell) in row.iter_mut().enumerate() {
                *cell = f(rx, ry);
            }
        }

        Self { rows }
    }

    /// Turn `x` times about X, then `y` times about Y
    pub fn forward() -> Self {
        let span = trace_span!("FaceTable::forward");
        let _guard = span.enter();

        let table = Self::build(|rx, ry| {
            Orientation::new()
                .rotate_x_n(rx as i64)
                .rotate_y_n(ry as i64)
        });
        trace!("Built forward face table");

        table
    }

    /// Undoes the matching [`Self::forward`] cell: `4 - y` turns about Y, then `4 - x` about X
    pub fn inverse() -> Self {
        let span = trace_span!("FaceTable::inverse");
        let _guard = span.enter();

        let table = Self::build(|rx, ry| {
            Orientation::new()
                .rotate_y_n((Self::SIZE - ry) as i64)
                .rotate_x_n((Self::SIZE - rx) as i64)
        });
        trace!("Built inverse face table");

        table
    }

    pub fn get(&self, x: Rotate90, y: Rotate90) -> Orientation {
        self.rows[x.index()][y.index()]
    }

    /// Label that ends up in `slot` after the `x` and `y` turns of this table
    pub fn mapping(&self, x: Rotate90, y: Rotate90, slot: Face) -> Face {
        self.get(x, y).slot(slot)
    }

    pub fn rows(&self) -> &[[Orientation; 4]; 4] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &Orientation> + '_ {
        self.rows.iter().flatten()
    }

    /// Whole table on one line, nested brackets at every level
    pub fn render(&self, notation: Notation) -> String {
        bracket(self.rows.iter().map(|row| {
            bracket(
                row.iter()
                    .map(|orientation| render_faces(&orientation.display(), notation)),
            )
        }))
    }

    /// `pub const` declaration of the table, one orientation per line
    pub fn to_rust_const(&self, name: &str) -> String {
        let mut out = format!("pub const {name}: [[[Face;6];4];4] = [\n");
        for (i, row) in self.rows.iter().enumerate() {
            out.push_str("    [\n");
            for (j, orientation) in row.iter().enumerate() {
                let sep = if j + 1 < row.len() { "," } else { "" };
                out.push_str(&format!(
                    "        {}{sep}\n",
                    render_faces(&orientation.display(), Notation::Path)
                ));
            }
            out.push_str(if i + 1 < self.rows.len() { "    ],\n" } else { "    ]\n" });
        }
        out.push_str("];\n");

        out
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
