//! Plan command implementation.
//!
//! Resolves the project configuration against the build mode and prints the
//! assembled plan. JSON goes to stdout; status messages go to stderr.

use tracing::info;

use baler_config::{BuildPlan, Mode};

use crate::cli::PlanArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::ui;

pub fn execute(args: PlanArgs) -> Result<()> {
    let mut config = load_config(&args.config)?;
    if args.analyze {
        config.analyze = true;
    }

    // CLI flag wins over BALER_MODE
    let mode = args.mode.map(Mode::from).unwrap_or_else(Mode::from_env);
    info!(%mode, "resolving build plan");

    let plan = BuildPlan::assemble(mode, &config);

    if args.summary {
        print_summary(&plan);
    } else {
        let json = serde_json::to_string_pretty(&plan.to_value()?)?;
        println!("{json}");
    }

    Ok(())
}

fn print_summary(plan: &BuildPlan) {
    ui::info(&format!("Mode: {}", plan.mode));
    ui::info(&format!(
        "Entries: {}",
        plan.bundle
            .entries
            .keys()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    ));
    ui::info(&format!("Output: {}", plan.bundle.output_dir.display()));
    ui::info(&format!("Filenames: {}", plan.bundle.filename_template));
    ui::info(&format!("Source maps: {:?}", plan.source_maps));

    if plan.optimization.minimizers.is_empty() {
        ui::info("Minimizers: none");
    } else {
        ui::info(&format!(
            "Minimizers: {}",
            plan.optimization
                .minimizers
                .iter()
                .map(|m| format!("{m:?}"))
                .collect::<Vec<_>>()
                .join(" → ")
        ));
    }

    ui::info(&format!("Rules: {}", plan.rules.rules.len()));
    ui::info(&format!("Plugins: {}", plan.plugins.plugins.len()));
    ui::info(&format!(
        "Dev server: {}:{} (hot reload {})",
        plan.dev_server.host,
        plan.dev_server.port,
        if plan.dev_server.hot { "on" } else { "off" }
    ));

    ui::success("Build plan assembled");
}
