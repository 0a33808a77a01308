use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod calendar;
pub mod error;
pub mod picker;

pub use calendar::{
    build_day_cells, format_date, get_days_in_month, get_month_year_string, is_date_in_range,
    is_day_in_range, is_same_day, parse_iso_date, DayCell, NavigationFlags, SelectionRange,
    ViewMonth, GRID_CELLS, WEEKDAY_LABELS,
};
pub use error::{DateError, LeaveApplicationError};
pub use picker::{DatePickerState, PickerConstraints, PickerEvent, PickerPhase};

/// Category of leave being requested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    #[default]
    Annual,
    Sick,
    Compassionate,
    Unpaid,
}

impl LeaveType {
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Compassionate,
        LeaveType::Unpaid,
    ];

    /// Stable identifier used in form controls and on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Annual => "annual",
            LeaveType::Sick => "sick",
            LeaveType::Compassionate => "compassionate",
            LeaveType::Unpaid => "unpaid",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|leave_type| leave_type.as_str() == value)
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LeaveType::Annual => "Annual leave",
            LeaveType::Sick => "Sick leave",
            LeaveType::Compassionate => "Compassionate leave",
            LeaveType::Unpaid => "Unpaid leave",
        };
        f.write_str(label)
    }
}

/// Body of `POST /api/leave-applications`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveApplicationRequest {
    /// First day of leave (YYYY-MM-DD on the wire)
    pub start_date: NaiveDate,
    /// Last day of leave, inclusive
    pub end_date: NaiveDate,
    pub leave_type: LeaveType,
    /// Free-text justification (max 500 characters)
    pub reason: String,
}

impl LeaveApplicationRequest {
    pub const MAX_REASON_LENGTH: usize = 500;

    /// Client-side checks before submitting; the server re-validates
    pub fn validate(&self) -> Result<(), LeaveApplicationError> {
        SelectionRange::new(Some(self.start_date), Some(self.end_date))?;

        let length = self.reason.chars().count();
        if length > Self::MAX_REASON_LENGTH {
            return Err(LeaveApplicationError::ReasonTooLong {
                length,
                max: Self::MAX_REASON_LENGTH,
            });
        }
        Ok(())
    }

    /// Calendar days covered, both ends included
    pub fn total_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveApplicationResponse {
    pub id: String,
    pub success_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: NaiveDate, end: NaiveDate) -> LeaveApplicationRequest {
        LeaveApplicationRequest {
            start_date: start,
            end_date: end,
            leave_type: LeaveType::Annual,
            reason: "Family visit".to_string(),
        }
    }

    #[test]
    fn test_leave_request_wire_format() {
        let request = LeaveApplicationRequest {
            leave_type: LeaveType::Compassionate,
            ..request(
                parse_iso_date("2025-01-15").unwrap(),
                parse_iso_date("2025-01-17").unwrap(),
            )
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["start_date"], "2025-01-15");
        assert_eq!(json["end_date"], "2025-01-17");
        assert_eq!(json["leave_type"], "compassionate");
    }

    #[test]
    fn test_leave_request_validation() {
        let start = parse_iso_date("2025-01-15").unwrap();
        let end = parse_iso_date("2025-01-17").unwrap();

        assert!(request(start, end).validate().is_ok());
        assert!(request(start, start).validate().is_ok());
        assert_eq!(
            request(end, start).validate(),
            Err(LeaveApplicationError::Dates(DateError::InvertedRange {
                min: end,
                max: start
            }))
        );
    }

    #[test]
    fn test_leave_request_reason_length() {
        let start = parse_iso_date("2025-01-15").unwrap();
        let max = LeaveApplicationRequest::MAX_REASON_LENGTH;

        // Multi-byte characters count once each
        let at_limit = LeaveApplicationRequest {
            reason: "é".repeat(max),
            ..request(start, start)
        };
        assert!(at_limit.validate().is_ok());

        let over_limit = LeaveApplicationRequest {
            reason: "x".repeat(max + 1),
            ..request(start, start)
        };
        assert_eq!(
            over_limit.validate(),
            Err(LeaveApplicationError::ReasonTooLong { length: max + 1, max })
        );
        assert_eq!(
            over_limit.validate().unwrap_err().to_string(),
            "reason is 501 characters long; the limit is 500"
        );
    }

    #[test]
    fn test_leave_request_total_days() {
        let start = parse_iso_date("2024-02-27").unwrap();
        let end = parse_iso_date("2024-03-01").unwrap();

        assert_eq!(request(start, end).total_days(), 4);
        assert_eq!(request(start, start).total_days(), 1);
    }

    #[test]
    fn test_leave_type_identifiers() {
        for leave_type in LeaveType::ALL {
            assert_eq!(LeaveType::from_str_opt(leave_type.as_str()), Some(leave_type));
        }
        assert_eq!(LeaveType::from_str_opt("sabbatical"), None);
        assert_eq!(LeaveType::Sick.to_string(), "Sick leave");
    }

    #[test]
    fn test_leave_response_parsing() {
        let response: LeaveApplicationResponse = serde_json::from_str(
            r#"{"id":"leave::1736899200000","success_message":"Leave application submitted"}"#,
        )
        .unwrap();
        assert_eq!(response.id, "leave::1736899200000");
    }
}
