pub mod add;
pub mod config;
pub mod del;
pub mod form;
pub mod init;
pub mod list;
pub mod log;
pub mod update;

use crate::config::Config;
use crate::core::controller::FormController;
use crate::core::view_model::ViewModel;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::status::AttendanceStatus;
use crate::utils::table::Table;

/// Open the configured database (creating the schema if needed) and load
/// the table.
pub(crate) fn open_controller(cfg: &Config) -> AppResult<FormController> {
    let store = RecordStore::open(&cfg.database)?;
    FormController::open(store)
}

pub(crate) fn parse_status(code: &str) -> AppResult<AttendanceStatus> {
    AttendanceStatus::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.to_string()))
}

/// Render the table with a leading row-number column, as used by `select`.
pub(crate) fn render_view(view: &ViewModel, cfg: &Config) -> String {
    let mut headers = vec!["#"];
    headers.extend(ViewModel::HEADERS);
    let mut table = Table::new(&headers, cfg.separator());

    for (i, row) in view.rows().iter().enumerate() {
        let mut cells = vec![(i + 1).to_string()];
        cells.extend(row.cells());
        table.add_row(cells);
    }

    table.render()
}
