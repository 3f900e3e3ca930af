use crate::cli::commands::{open_controller, render_view};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let ctl = open_controller(cfg)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(ctl.view().rows())?);
            return Ok(());
        }

        if ctl.view().row_count() == 0 {
            info("No attendance records yet.");
            return Ok(());
        }

        print!("{}", render_view(ctl.view(), cfg));
        println!("\n{} record(s)", ctl.view().row_count());
    }

    Ok(())
}
