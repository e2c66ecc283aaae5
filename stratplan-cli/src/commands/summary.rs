//! Console summary of a plan record

use stratplan_core::PlanRecord;

const PREVIEW_CHARS: usize = 72;

/// Print what was extracted into `record`
pub fn print_summary(record: &PlanRecord, verbose: bool) {
    println!("📄 {}", record.title);
    println!();
    println!("  Vision:  {}", preview(&record.vision));
    println!("  Mission: {}", preview(&record.mission));
    println!();

    println!("  Values ({}):", record.values.len());
    for value in &record.values {
        println!("    • {}", value);
    }

    println!("  Strategic objectives ({}):", record.strategic_objectives.len());
    for objective in &record.strategic_objectives {
        println!("    • {}", objective.objective);
    }

    println!("  Projects ({}):", record.projects.len());
    for project in &record.projects {
        println!("    📝 {} [{}]", project.name, project.status);
        if verbose && !project.description.is_empty() {
            println!("       └─ {}", preview(&project.description));
        }
    }
    println!();

    println!(
        "  Implementation: {}",
        preview(record.implementation_framework.description().unwrap_or(""))
    );
    println!(
        "  Monitoring:     {}",
        preview(record.monitoring_evaluation.description().unwrap_or(""))
    );
    println!();
    println!(
        "  Raw content: {} characters, {} lines",
        record.raw_content.chars().count(),
        record.raw_content.lines().count()
    );
}

/// First line of `text`, shortened for display
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("");
    if line.is_empty() {
        return "(not found)".to_string();
    }

    let mut shown: String = line.chars().take(PREVIEW_CHARS).collect();
    if line.chars().count() > PREVIEW_CHARS || text.lines().nth(1).is_some() {
        shown.push_str("...");
    }
    shown
}
