use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::ui::dashboard::{StatusView, render_status};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Status { json } = cmd {
        let session = ctx.session()?;
        if *json {
            let view = StatusView::new(ctx.date, &session);
            let out = serde_json::to_string_pretty(&view)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{}", out);
        } else {
            print_status(ctx, &session);
        }
    }
    Ok(())
}

/// Re-render after a state change.
pub fn print_status(ctx: &AppContext, session: &Session) {
    println!();
    println!("{}", render_status(ctx.date, session, &ctx.palette()));
}
