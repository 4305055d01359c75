use crate::commands::report;
use crate::models::config::Config;
use crate::models::outcome::{StepRecord, UninstallReport};
use crate::services::launch_agent::LaunchAgent;
use crate::services::prompter::Prompter;
use crate::services::{remover, scanner, stripper};
use crate::utils::size::dir_usage;
use anyhow::Result;

#[derive(Debug)]
pub enum Completion {
    Cancelled,
    Finished(UninstallReport),
}

pub fn run(config: &Config, prompter: &mut dyn Prompter) -> Result<Completion> {
    report::print_banner("QMD History Search Uninstaller");
    println!("{}", report::plan_table(config));
    println!();

    if !prompter.confirm("Continue with uninstallation?", false)? {
        println!("Uninstallation cancelled.");
        return Ok(Completion::Cancelled);
    }

    let mut report = UninstallReport::default();

    step("Step 1: Stopping Services");
    stop_services(config, &mut report);

    step("Step 2: Removing Files");
    remove_files(config, &mut report);

    strip_configs(config, prompter, &mut report)?;
    remove_converted_history(config, prompter, &mut report)?;

    report::print_banner("Uninstallation Complete!");
    println!("{}", report::summary_table(&report));
    println!();
    report::print_reminders();

    if report.failures() > 0 {
        log::warn!("{} step(s) failed, see above", report.failures());
    }
    Ok(Completion::Finished(report))
}

fn step(title: &str) {
    println!();
    println!("{}", title);
    println!();
}

fn record(report: &mut UninstallReport, record: StepRecord) {
    println!("  {} {}: {}", record.status, record.item, record.detail);
    report.push(record);
}

fn stop_services(config: &Config, report: &mut UninstallReport) {
    let outcome = LaunchAgent::new(config).stop();
    record(report, StepRecord::stop("LaunchAgent", &outcome));
}

/// The plist goes first; the agent must already be unloaded.
fn remove_files(config: &Config, report: &mut UninstallReport) {
    let targets = [
        (&config.launch_agent_plist, "LaunchAgent plist"),
        (&config.converter_script, "Converter script"),
        (&config.skill_dir, "Skill directory"),
    ];
    for (path, label) in targets {
        let outcome = remover::remove(path, label);
        record(report, StepRecord::removal(label, &outcome));
    }
}

fn strip_configs(
    config: &Config,
    prompter: &mut dyn Prompter,
    report: &mut UninstallReport,
) -> Result<()> {
    let found = scanner::scan(config);
    if found.is_empty() {
        log::debug!("no assistant configurations reference the integration");
        return Ok(());
    }

    step("Step 3: AI Assistant Configurations");
    let items: Vec<String> = found
        .iter()
        .map(|i| format!("{} ({})", i.name, config.display_path(&i.config_path)))
        .collect();
    let chosen = prompter.multi_select(
        "Select which AI assistant configurations to remove",
        &items,
    )?;

    for (index, integration) in found.iter().enumerate() {
        let label = format!("{} configuration", integration.name);
        if chosen.contains(&index) && integration.exists {
            log::debug!("stripping {} config {}", integration.id, integration.config_path.display());
            let outcome = stripper::strip_file(&integration.config_path);
            record(report, StepRecord::strip(&label, &outcome));
        } else {
            record(report, StepRecord::skipped(&label, "kept"));
        }
    }
    Ok(())
}

fn remove_converted_history(
    config: &Config,
    prompter: &mut dyn Prompter,
    report: &mut UninstallReport,
) -> Result<()> {
    let dir = &config.converted_history_dir;
    if !dir.exists() {
        return Ok(());
    }

    step("Step 4: Converted History");
    let prompt = format!(
        "Remove converted history at {} ({})?",
        config.display_path(dir),
        dir_usage(dir)
    );

    if prompter.confirm(&prompt, false)? {
        let outcome = remover::remove(dir, "Converted history");
        record(report, StepRecord::removal("Converted history", &outcome));
    } else {
        record(report, StepRecord::skipped("Converted history", "preserved"));
    }
    Ok(())
}
