use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        BackupLogic::backup(&ctx.log, file, *compress)?;
    }
    Ok(())
}
