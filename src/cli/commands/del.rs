use crate::cli::commands::open_controller;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::Notice;
use crate::errors::AppResult;
use crate::ui::messages::{ask_confirmation, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut ctl = open_controller(cfg)?;
        ctl.select_id(*id)?;

        let skip_prompt = *yes || !cfg.confirm_delete;
        let mut confirm = |prompt: &str| skip_prompt || ask_confirmation(prompt);

        match ctl.delete(&mut confirm)? {
            Notice::Cancelled => info(Notice::Cancelled),
            notice => success(notice),
        }
    }

    Ok(())
}
