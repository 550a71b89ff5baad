use crate::cli::commands::status::print_status;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !ask_confirmation("Are you sure you want to reset today's progress?") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut session = ctx.session()?;
        session.reset();
        ctx.persist(&session)?;

        success(format!("Progress for {} has been reset.", ctx.date));
        print_status(ctx, &session);
    }
    Ok(())
}
