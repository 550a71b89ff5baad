use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::DailyLog;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty daily log file
pub fn handle(cli: &Cli) -> AppResult<()> {
    let log_path = Config::init_all(cli.file.clone(), cli.test)?;

    println!("⚙️  Initializing WaterBuddy…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("💧 Daily log   : {}", log_path.display());

    DailyLog::new(&log_path).ensure_exists()?;

    success(format!("Daily log ready at {}", log_path.display()));
    Ok(())
}
