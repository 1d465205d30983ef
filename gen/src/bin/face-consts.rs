use std::io::{stdout, Write};

use anyhow::{Context, Result};
use tracing::info;

use cubic_gen::{bootstrap::bootstrap, report::write_consts, utils::VERSION};

fn main() -> Result<()> {
    bootstrap();

    info!("Emitting face rotation constants. Cubic v{VERSION}");

    let mut out = stdout().lock();
    write_consts(&mut out).with_context(|| "While writing face rotation constants")?;
    out.flush()?;

    Ok(())
}
