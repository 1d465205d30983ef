use std::io::{stdout, Write};

use tracing::{debug, info};

use cubic_gen::{bootstrap::bootstrap, error::Error, report::write_report, utils::VERSION};

fn main() -> Result<(), Error> {
    bootstrap();

    info!("Generating face rotation tables. Cubic v{VERSION}");

    let mut out = stdout().lock();
    write_report(&mut out)?;
    out.flush()?;

    debug!("Tables written");

    Ok(())
}
