use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum AttendanceStatus {
    #[default]
    Present, // Hadir
    Excused, // Izin
    Sick,    // Sakit
    Absent,  // Alfa
}

impl AttendanceStatus {
    /// Selector order, first entry is the form default.
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Excused,
        AttendanceStatus::Sick,
        AttendanceStatus::Absent,
    ];

    pub fn first() -> Self {
        Self::ALL[0]
    }

    /// Human label shown in the table and the form.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Excused => "Excused",
            AttendanceStatus::Sick => "Sick",
            AttendanceStatus::Absent => "Absent",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Hadir",
            AttendanceStatus::Excused => "Izin",
            AttendanceStatus::Sick => "Sakit",
            AttendanceStatus::Absent => "Alfa",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Hadir" => Some(AttendanceStatus::Present),
            "Izin" => Some(AttendanceStatus::Excused),
            "Sakit" => Some(AttendanceStatus::Sick),
            "Alfa" => Some(AttendanceStatus::Absent),
            _ => None,
        }
    }

    /// Helper: parse user input. Accepts the English label or the stored
    /// code, in any case ("present", "HADIR", "sick", ...).
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_lowercase();
        Self::ALL.into_iter().find(|s| {
            s.label().to_lowercase() == code || s.to_db_str().to_lowercase() == code
        })
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
