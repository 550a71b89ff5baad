use crate::cli::commands::status::print_status;
use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Age { group } = cmd {
        let mut session = ctx.session()?;

        if !session.set_age_group(group) {
            warning(format!(
                "Unknown age group '{}'. Goal unchanged ({} ml). Use child, teen, adult or senior.",
                group, session.goal_ml
            ));
            return Ok(());
        }

        ctx.persist(&session)?;

        let mut cfg = ctx.cfg.clone();
        cfg.age_group = session.age_group.code().to_string();
        ctx.save_config(&cfg)?;

        success(format!(
            "Age group set to {}: daily goal is now {} ml",
            session.age_group.label(),
            session.goal_ml
        ));
        print_status(ctx, &session);
    }
    Ok(())
}
