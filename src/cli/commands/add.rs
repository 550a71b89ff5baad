use crate::cli::commands::status::print_status;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Log water for the day.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add { amount } = cmd {
        let mut session = ctx.session()?;

        let added = match amount {
            Some(text) => Some(session.add_custom(text)?),
            None => {
                let quick = ctx.cfg.quick_add_ml;
                session
                    .add_water(quick)
                    .then(|| u32::try_from(quick).unwrap_or(u32::MAX))
            }
        };

        match added {
            Some(ml) => {
                ctx.persist(&session)?;
                success(format!("+{} ml logged ({} ml today)", ml, session.total_ml));
            }
            None => info("Quick amount is not positive; nothing logged."),
        }

        print_status(ctx, &session);
    }
    Ok(())
}
