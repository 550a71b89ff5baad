//! Per-invocation state shared by every command handler.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::store::DailyLog;
use crate::utils::colors::Palette;
use crate::utils::date;
use chrono::NaiveDate;
use tracing::debug;

pub struct AppContext {
    pub cfg: Config,
    pub log: DailyLog,
    /// The day being tracked (today unless `--date` was given).
    pub date: NaiveDate,
    pub test: bool,
}

impl AppContext {
    pub fn new(cfg: Config, log: DailyLog, date: NaiveDate, test: bool) -> Self {
        Self {
            cfg,
            log,
            date,
            test,
        }
    }

    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let cfg = Config::load()?;

        let log = match &cli.file {
            Some(custom) => DailyLog::new(custom),
            None => DailyLog::new(cfg.log_path()),
        };

        let date = match &cli.date {
            Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?,
            None => date::today(),
        };

        debug!(log = %log.path().display(), %date, "context ready");
        Ok(Self::new(cfg, log, date, cli.test))
    }

    /// Session for `self.date`, restored from the daily log.
    pub fn session(&self) -> AppResult<Session> {
        let mut session = Session::new(self.cfg.age_group(), self.cfg.dark_mode);
        session.restore(self.log.load_today(self.date)?);
        Ok(session)
    }

    pub fn persist(&self, session: &Session) -> AppResult<()> {
        self.log
            .save_today(self.date, session.total_ml, session.goal_ml)
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.cfg.dark_mode)
    }

    /// Write the config file unless running in test mode.
    pub fn save_config(&self, cfg: &Config) -> AppResult<()> {
        if self.test {
            debug!("test mode: configuration not saved");
            return Ok(());
        }
        cfg.save()
    }
}
