use crate::cli::parser::{Commands, ThemeChoice};
use crate::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::Palette;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Theme { mode, .. } = cmd {
        // clap only lets `mode` be empty when --toggle was given
        let dark_mode = match mode {
            Some(ThemeChoice::Dark) => true,
            Some(ThemeChoice::Light) => false,
            None => !ctx.cfg.dark_mode,
        };

        let mut cfg = ctx.cfg.clone();
        cfg.dark_mode = dark_mode;
        ctx.save_config(&cfg)?;

        let name = if dark_mode { "dark" } else { "light" };
        let palette = Palette::for_mode(dark_mode);
        success(format!("Theme set to {}", palette.title.paint(name)));
    }
    Ok(())
}
