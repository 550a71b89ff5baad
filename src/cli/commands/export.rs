use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        ExportLogic::export(&ctx.log, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
