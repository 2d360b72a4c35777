//! Toolsmith - Main CLI Entry Point

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use toolsmith::{
    cli::{Args, Commands},
    config::Config,
    generator::ProjectGenerator,
    registry::ToolRegistry,
    validation::{ProjectValidator, Severity, Verdict},
};

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::List => run_list(),
        Commands::Create { tool, output } => run_create(&tool, output),
        Commands::CreateAll {
            output,
            skip_checks,
        } => run_create_all(output, skip_checks),
        Commands::Check { path, json } => run_check(&path, json),
    }
}

fn run_list() -> Result<()> {
    let registry = ToolRegistry::new();

    println!();
    println!("{}", "Available AI tools:".bold());
    println!();
    for spec in registry.iter() {
        println!("  {} - {}", format!("{:<30}", spec.id).cyan(), spec.name);
    }
    println!();

    Ok(())
}

fn run_create(tool: &str, output: Option<PathBuf>) -> Result<()> {
    let output_dir = resolve_output_dir(output)?;
    let generator = ProjectGenerator::new();

    let project_dir = generator.generate(tool, &output_dir)?;

    let name = generator
        .registry()
        .get(tool)
        .map(|spec| spec.name.as_str())
        .unwrap_or(tool);

    println!();
    println!(
        "{} Created '{}' in {}",
        "✓".green().bold(),
        name,
        project_dir.display()
    );
    print_next_steps(&format!("cd {}", project_dir.display()));

    Ok(())
}

fn run_create_all(output: Option<PathBuf>, skip_checks: bool) -> Result<()> {
    let output_dir = resolve_output_dir(output)?;
    let generator = ProjectGenerator::new();
    let validator = ProjectValidator::new();

    let total = generator.registry().len();
    println!();
    println!(
        "Creating {} AI tools in {}",
        total,
        output_dir.display().to_string().cyan()
    );
    println!();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut generated = 0usize;
    let mut passed = 0usize;
    let mut failed: Vec<String> = Vec::new();

    let tool_ids: Vec<String> = generator
        .registry()
        .ids()
        .iter()
        .map(|id| id.to_string())
        .collect();

    for tool_id in &tool_ids {
        pb.set_message(tool_id.clone());

        match generator.generate(tool_id, &output_dir) {
            Ok(project_dir) => {
                generated += 1;

                if skip_checks {
                    pb.println(format!("  {} {}", "✓".green(), tool_id));
                    passed += 1;
                } else {
                    let report = validator.validate(&project_dir)?;
                    if report.passed() {
                        passed += 1;
                        let warnings = report.failed_count(Severity::Recommended);
                        if warnings > 0 {
                            pb.println(format!(
                                "  {} {} ({} warnings)",
                                "✓".green(),
                                tool_id,
                                warnings
                            ));
                        } else {
                            pb.println(format!("  {} {}", "✓".green(), tool_id));
                        }
                    } else {
                        failed.push(tool_id.clone());
                        pb.println(format!(
                            "  {} {} ({} required checks failed)",
                            "✗".red(),
                            tool_id,
                            report.failed_count(Severity::Required)
                        ));
                    }
                }
            }
            Err(e) => {
                failed.push(tool_id.clone());
                pb.println(format!("  {} {}: {}", "✗".red(), tool_id, e));
            }
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    let rule = "=".repeat(60);
    println!();
    println!("{rule}");
    println!("{}", "Summary".bold());
    println!("{rule}");
    println!("  Generated:     {}/{}", generated, total);
    if !skip_checks {
        println!("  Passed checks: {}/{}", passed, generated);
    }
    println!("{rule}");

    if !failed.is_empty() {
        println!();
        println!("{}", "Failed:".red().bold());
        for tool in &failed {
            println!("  • {}", tool);
        }
        std::process::exit(1);
    }

    print_next_steps(&format!(
        "cd into any tool directory under {}",
        output_dir.display()
    ));

    Ok(())
}

fn run_check(path: &Path, json: bool) -> Result<()> {
    let validator = ProjectValidator::new();

    let report = match validator.validate(path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(2);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        report.print();
    }

    std::process::exit(match report.verdict() {
        Verdict::Pass => 0,
        Verdict::Fail => 1,
    });
}

/// Output directory: explicit flag wins, otherwise the configured default.
fn resolve_output_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag {
        Some(dir) => Ok(dir),
        None => {
            let config = Config::load()?;
            Ok(config.output_dir().to_path_buf())
        }
    }
}

fn print_next_steps(first_step: &str) {
    println!();
    println!("{}", "Next steps:".bold());
    println!("  1. {}", first_step);
    println!("  2. cp .env.example .env");
    println!("  3. Add your VITE_ANTHROPIC_API_KEY to .env");
    println!("  4. npm install");
    println!("  5. npm run dev");
    println!();
}
