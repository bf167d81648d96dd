use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use gbf::config::GBFConfig;
use gbf::io::cli::Cli;
use gbf::io::output::{GBFOutput, export_solution};
use gbf::opt::GBFOptimizer;
use gbf::{EPOCH, io};
use glasscut::entities::MaterialSummary;
use glasscut::io::svg::sheet_to_svg;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: GBFConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            GBFConfig::default()
        }
        Some(config_file) => io::read_json(&config_file).context("incorrect config file format")?,
    };

    info!("[MAIN] Successfully parsed GBFConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let demand = io::read_demand(&args.input_file)?;
    let optimizer = GBFOptimizer::new(config.clone()).context("invalid catalog in config")?;
    let outcomes = optimizer.optimize_all(&demand);

    for outcome in &outcomes {
        if let Ok(sheets) = &outcome.result {
            let summary = MaterialSummary::from_sheets(sheets);
            info!(
                "[MAIN] {}: {} sheets, {} pieces, {:.2}% efficiency",
                outcome.code, summary.sheet_count, summary.piece_count, summary.efficiency
            );
        }
    }

    {
        let output = GBFOutput {
            demand,
            solution: export_solution(&outcomes, *EPOCH),
            config: config.clone(),
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));

        io::write_json(&output, Path::new(&solution_path))?;
    }

    if config.svg_export {
        for outcome in &outcomes {
            let Ok(sheets) = &outcome.result else {
                continue;
            };
            for (i, sheet) in sheets.iter().enumerate() {
                let svg_path = args
                    .solution_folder
                    .join(format!("sol_{input_file_stem}_{}_{i}.svg", outcome.code));
                let title = format!("{} of {}", i + 1, sheets.len());
                let svg = sheet_to_svg(sheet, config.svg_draw_options, &title);

                io::write_svg(&svg, Path::new(&svg_path))?;
            }
        }
    }

    Ok(())
}
