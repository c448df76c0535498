//! Explain command implementation.
//!
//! Shows which rule the table selects for a file, and the loader chain that
//! rule applies. One rule fires at most; evaluation is first-match-wins.

use baler_config::{Loader, RuleTable};

use crate::cli::ExplainArgs;
use crate::config::load_config;
use crate::error::Result;
use crate::ui;

pub fn execute(args: ExplainArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    let table = RuleTable::standard(&config.bundle);

    match table.first_match(&args.file) {
        Some(rule) => {
            ui::info(&format!(
                "{} matches pattern {}",
                args.file.display(),
                rule.test.as_str()
            ));
            for (index, loader) in rule.chain.iter().enumerate() {
                println!("{}. {}", index + 1, describe(loader));
            }
        }
        None => {
            println!("no rule matches {}", args.file.display());
        }
    }

    Ok(())
}

fn describe(loader: &Loader) -> String {
    match loader {
        Loader::StyleExtract { public_path } if public_path.is_empty() => {
            "style-extract".to_string()
        }
        Loader::StyleExtract { public_path } => {
            format!("style-extract (public path {public_path})")
        }
        Loader::Style => "style".to_string(),
        Loader::SassPreprocessor => "sass-preprocessor".to_string(),
        Loader::AssetFile => "asset-file".to_string(),
        Loader::Xml => "xml".to_string(),
        Loader::Csv => "csv".to_string(),
        Loader::Script(transform) => format!(
            "script (target {:?}, class properties {})",
            transform.target,
            if transform.class_properties { "on" } else { "off" }
        ),
    }
}
