use crate::cli::parser::Commands;
use crate::core::tips::random_tip;
use crate::errors::AppResult;
use crate::ui::messages::tip;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if matches!(cmd, Commands::Tip) {
        tip(random_tip());
    }
    Ok(())
}
