use crate::cli::commands::status::print_status;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Goal { value } = cmd {
        let mut session = ctx.session()?;
        let goal = session.set_manual_goal(value)?;
        ctx.persist(&session)?;

        success(format!("Daily goal set to {} ml", goal));
        print_status(ctx, &session);
    }
    Ok(())
}
