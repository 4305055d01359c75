use crate::models::config::Config;
use crate::models::outcome::UninstallReport;
use comfy_table::presets::NOTHING;
use comfy_table::Table;

const BANNER_WIDTH: usize = 60;

pub fn banner(text: &str) -> String {
    let inner = BANNER_WIDTH.max(text.chars().count());
    let left = (inner - text.chars().count()) / 2;
    let right = inner - text.chars().count() - left;
    format!(
        "╔{bar}╗\n║{}{text}{}║\n╚{bar}╝",
        " ".repeat(left),
        " ".repeat(right),
        bar = "═".repeat(inner),
    )
}

pub fn print_banner(text: &str) {
    println!();
    println!("{}", banner(text));
    println!();
}

pub fn plan_table(config: &Config) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["", "Item", "Location"]);

    let rows = [
        ("✗", "LaunchAgent (auto-updates)", config.display_path(&config.launch_agent_plist)),
        ("✗", "Converter script", config.display_path(&config.converter_script)),
        ("✗", "Skill files", config.display_path(&config.skill_dir)),
        ("?", "AI assistant configurations (optional)", "backed up before editing".to_string()),
        ("?", "Converted history (optional)", config.display_path(&config.converted_history_dir)),
        ("✓", "Original JSONL files (preserved)", config.display_path(&config.projects_dir())),
        ("✓", "QMD collections (preserved)", "manual removal required".to_string()),
    ];
    for (mark, item, location) in rows {
        table.add_row(vec![mark.to_string(), item.to_string(), location]);
    }
    table
}

pub fn summary_table(report: &UninstallReport) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(vec!["", "Item", "Result"]);
    for step in &report.steps {
        table.add_row(vec![step.status.to_string(), step.item.clone(), step.detail.clone()]);
    }
    table
}

pub fn print_reminders() {
    println!("To remove QMD collections manually:");
    println!("  qmd collection list");
    println!("  qmd collection remove <name>");
    println!();
    println!("To reinstall:");
    println!("  ./install.sh");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outcome::{RemovalOutcome, StepRecord};

    #[test]
    fn banner_is_centered_and_boxed() {
        let b = banner("Done");
        let lines: Vec<&str> = b.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].chars().count(), BANNER_WIDTH + 2);
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
        assert!(lines[1].starts_with(&format!("║{}Done", " ".repeat(28))));
    }

    #[test]
    fn long_banner_text_widens_box() {
        let text = "x".repeat(BANNER_WIDTH + 5);
        let b = banner(&text);
        assert!(b.lines().all(|l| l.chars().count() == BANNER_WIDTH + 7));
    }

    #[test]
    fn plan_mentions_every_target() {
        let config = Config::with_home("/home/ada");
        let rendered = plan_table(&config).to_string();
        assert!(rendered.contains("~/.local/bin/convert-claude-history.sh"));
        assert!(rendered.contains("~/.claude/skills/qmd-claude-history"));
        assert!(rendered.contains("~/.claude/converted-history"));
        assert!(rendered.contains("Original JSONL files"));
    }

    #[test]
    fn summary_lists_each_step() {
        let mut report = UninstallReport::default();
        report.push(StepRecord::removal("Converter script", &RemovalOutcome::Removed));
        report.push(StepRecord::removal("Skill directory", &RemovalOutcome::NotFound));
        let rendered = summary_table(&report).to_string();
        assert!(rendered.contains("Converter script"));
        assert!(rendered.contains("not found"));
    }
}
