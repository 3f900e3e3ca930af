use crate::cli::commands::{open_controller, parse_status};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Add a record from the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        class,
        date,
        status,
    } = cmd
    {
        let status = parse_status(status)?;

        let mut ctl = open_controller(cfg)?;
        ctl.set_name(name);
        ctl.set_class(class);
        ctl.set_date(date);
        ctl.set_status(status);

        let notice = ctl.add()?;
        success(notice);
    }

    Ok(())
}
