use std::io::{self, Write};

use common::{render_faces, FaceTable, Notation, Orientation};
use tracing::{debug, trace_span};

/// Writes the face rotation report printed by `cube-faces`:
/// the identity check, then the forward and inverse tables
pub fn write_report(out: &mut impl Write) -> io::Result<()> {
    let span = trace_span!("Report");
    let _guard = span.enter();

    // Whole turns must bring the cube back to where it started
    let mut cube = Orientation::new().rotate_y_n(8);
    writeln!(out, "{}", render_faces(&cube.display(), Notation::Bare))?;
    cube = cube.rotate_x_n(4);
    writeln!(out, "{}", render_faces(&cube.display(), Notation::Bare))?;
    writeln!(out)?;

    debug!("Writing forward table");
    writeln!(out, "{}", FaceTable::forward().render(Notation::Bare))?;
    writeln!(out)?;

    debug!("Writing inverse table");
    writeln!(out, "{}", FaceTable::inverse().render(Notation::Bare))?;
    writeln!(out)?;

    Ok(())
}

/// Writes both tables as Rust constants for the block model renderer
pub fn write_consts(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "// x-rotate is counterclockwise (right hand), y-rotate is clockwise"
    )?;
    write!(out, "{}", FaceTable::forward().to_rust_const("FACE_ROTATE"))?;
    writeln!(out)?;
    write!(out, "{}", FaceTable::inverse().to_rust_const("FACE_ROTATE_INV"))?;

    Ok(())
}
