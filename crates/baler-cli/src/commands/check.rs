//! Check command implementation.
//!
//! Loads the configuration and runs schema plus filesystem validation.
//! Any missing input file is a fatal configuration error.

use baler_config::validate_fs;

use crate::cli::CheckArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::ui;

pub fn execute(args: CheckArgs) -> Result<()> {
    let config = load_config(&args.config)?;

    validate_fs(&config, &args.config.root)?;

    // Not fatal, but every entry bundle would share one output name
    let bundle = &config.bundle;
    if bundle.entries.len() > 1 && !bundle.filename_template.contains("[name]") {
        ui::warning(&format!(
            "filename template '{}' has no [name] placeholder; entry bundles will collide",
            bundle.filename_template
        ));
    }

    ui::success(&format!(
        "Configuration is valid ({} entries, template {})",
        config.bundle.entries.len(),
        config.bundle.html.template.display()
    ));

    Ok(())
}
