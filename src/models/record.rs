use super::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub id: i64,                  // ⇔ absensi.id (INTEGER PK AUTOINCREMENT)
    pub name: String,             // ⇔ absensi.nama
    pub class_name: String,       // ⇔ absensi.kelas
    pub date: NaiveDate,          // ⇔ absensi.tanggal (TEXT "YYYY-MM-DD")
    pub status: AttendanceStatus, // ⇔ absensi.status ('Hadir','Izin','Sakit','Alfa')
}

impl AttendanceRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
