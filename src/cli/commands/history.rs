use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::dashboard::render_history;
use crate::ui::messages::info;
use crate::utils::range::parse_optional_range;

/// Newest day first.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::History { range } = cmd {
        let bounds = parse_optional_range(range.as_deref())?;
        let history = ctx.log.load_all()?;

        let records: Vec<_> = history
            .values()
            .rev()
            .filter(|r| bounds.is_none_or(|b| b.contains(r.date)))
            .collect();

        if records.is_empty() {
            info("No history yet. Drink some water and it will be saved automatically.");
        } else {
            let palette = ctx.palette();
            println!("📅 Hydration history:\n");
            print!("{}", render_history(records, &palette));
        }

        println!();
        println!(
            "{}",
            ctx.palette().muted.paint(format!(
                "History is stored locally in {} (no cloud login / no external DB).",
                ctx.log.path().display()
            ))
        );
    }
    Ok(())
}
