use crate::cli::commands::{open_controller, parse_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Select the row showing `id`, override the given fields and update it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        id,
        name,
        class,
        date,
        status,
    } = cmd
    {
        let status = status.as_deref().map(parse_status).transpose()?;

        let mut ctl = open_controller(cfg)?;
        ctl.select_id(*id)?;

        if let Some(v) = name {
            ctl.set_name(v);
        }
        if let Some(v) = class {
            ctl.set_class(v);
        }
        if let Some(v) = date {
            ctl.set_date(v);
        }
        if let Some(s) = status {
            ctl.set_status(s);
        }

        let notice = ctl.update()?;
        success(notice);
    }

    Ok(())
}
