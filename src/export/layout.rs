//! Fixed export layout.
//!
//! Coordinates are in mm from the top-left of an A4 page, matching the
//! rendered document: heading at (10, 10), one field line every 10 mm below
//! it, photo block at (10, 80) sized 50x50 mm. There is no pagination and no
//! text wrapping; long values overrun the page.

use crate::model::Report;

/// A4 page size (mm).
pub const PAGE_WIDTH_MM: f64 = 210.0;
pub const PAGE_HEIGHT_MM: f64 = 297.0;

/// Text column and line positions (mm, from the top).
pub const TEXT_X_MM: f64 = 10.0;
pub const HEADING_Y_MM: f64 = 10.0;
pub const FIELD_START_Y_MM: f64 = 20.0;
pub const FIELD_STEP_MM: f64 = 10.0;

/// Photo block (mm, from the top).
pub const PHOTO_X_MM: f64 = 10.0;
pub const PHOTO_Y_MM: f64 = 80.0;
pub const PHOTO_SIZE_MM: f64 = 50.0;

pub const FONT_SIZE_PT: f64 = 12.0;

/// Heading line shared by both exporters.
pub const HEADING: &str = "Report Details";

/// The exported field lines, in order. Both exporters emit the same set.
pub fn field_lines(report: &Report) -> [String; 6] {
    [
        format!("Name: {}", report.name),
        format!("Email: {}", report.email),
        format!("Department: {}", report.department),
        format!("Date: {}", report.date),
        format!("Objective: {}", report.objective),
        format!("Report: {}", report.report),
    ]
}

/// Convert a top-down Y coordinate to the PDF's bottom-up axis.
#[inline]
pub fn y_from_top_mm(y: f64) -> f64 {
    PAGE_HEIGHT_MM - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lines_order() {
        let report = Report {
            name: "A. Kumar".to_string(),
            email: "a@x.edu".to_string(),
            department: "AI".to_string(),
            date: "2024-05-01".to_string(),
            objective: "Test".to_string(),
            report: "Body text".to_string(),
            ..Default::default()
        };

        let lines = field_lines(&report);
        assert_eq!(lines[0], "Name: A. Kumar");
        assert_eq!(lines[1], "Email: a@x.edu");
        assert_eq!(lines[2], "Department: AI");
        assert_eq!(lines[3], "Date: 2024-05-01");
        assert_eq!(lines[4], "Objective: Test");
        assert_eq!(lines[5], "Report: Body text");
    }

    #[test]
    fn test_field_lines_empty_report() {
        let lines = field_lines(&Report::default());
        assert_eq!(lines[0], "Name: ");
        assert_eq!(lines[5], "Report: ");
    }

    #[test]
    fn test_line_positions() {
        // heading, then six lines at 20..70 in 10 mm steps
        let last_y = FIELD_START_Y_MM + FIELD_STEP_MM * 5.0;
        assert!((last_y - 70.0).abs() < f64::EPSILON);

        // the photo block starts below the last text line
        assert!(PHOTO_Y_MM > last_y);
        assert!(PHOTO_Y_MM + PHOTO_SIZE_MM < PAGE_HEIGHT_MM);
    }

    #[test]
    fn test_y_axis_flip() {
        assert!((y_from_top_mm(10.0) - 287.0).abs() < f64::EPSILON);
    }
}
