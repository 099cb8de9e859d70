//! Report data model.
//!
//! `Draft` is the in-progress form state, `Report` the frozen record that is
//! persisted and exported. The persisted JSON uses camelCase field names.

use serde::{Deserialize, Serialize};

/// Department choices offered by the personal-information form.
pub const DEPARTMENTS: &[&str] = &[
    "Computer Science",
    "Electrical",
    "EEE",
    "AI",
    "Mechanical",
    "Automobile",
];

/// Photo attached to a draft. Either nothing was selected yet, or a file was
/// read and wrapped as a base64 data URI for preview and PDF embedding.
#[derive(Debug, Clone, Default)]
pub enum Photo {
    #[default]
    Unset,
    Selected {
        bytes: Vec<u8>,
        data_uri: String,
    },
}

impl Photo {
    pub fn data_uri(&self) -> Option<&str> {
        match self {
            Photo::Unset => None,
            Photo::Selected { data_uri, .. } => Some(data_uri),
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Photo::Selected { .. })
    }
}

/// Scalar form fields. Empty string means "not filled in"; there is no null
/// state and no field is validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Department,
    Date,
    Objective,
    Report,
    EventName,
    DateFrom,
    DateTo,
}

impl Field {
    pub const ALL: [Field; 10] = [
        Field::Name,
        Field::Email,
        Field::Mobile,
        Field::Department,
        Field::Date,
        Field::Objective,
        Field::Report,
        Field::EventName,
        Field::DateFrom,
        Field::DateTo,
    ];

    /// Prompt label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Mobile => "Mobile Number",
            Field::Department => "Department",
            Field::Date => "Date",
            Field::Objective => "Objective",
            Field::Report => "Report",
            Field::EventName => "Event Name",
            Field::DateFrom => "Date From",
            Field::DateTo => "Date To",
        }
    }
}

/// In-progress form data. Exactly one draft exists at a time; it is replaced
/// wholesale when a preview is confirmed.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub department: String,
    pub date: String,
    pub objective: String,
    pub report: String,
    pub event_name: String,
    pub date_from: String,
    pub date_to: String,
    pub photo: Photo,
}

impl Draft {
    /// Replace one scalar field. Accepts anything, including empty strings.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Mobile => self.mobile = value,
            Field::Department => self.department = value,
            Field::Date => self.date = value,
            Field::Objective => self.objective = value,
            Field::Report => self.report = value,
            Field::EventName => self.event_name = value,
            Field::DateFrom => self.date_from = value,
            Field::DateTo => self.date_to = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::Department => &self.department,
            Field::Date => &self.date,
            Field::Objective => &self.objective,
            Field::Report => &self.report,
            Field::EventName => &self.event_name,
            Field::DateFrom => &self.date_from,
            Field::DateTo => &self.date_to,
        }
    }
}

/// A submitted report. Immutable once created; this is the persisted shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
    pub id: String,
    pub created_at: String,
    pub photo_url: Option<String>,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub department: String,
    pub date: String,
    pub objective: String,
    pub report: String,
    pub event_name: String,
    pub date_from: String,
    pub date_to: String,
}
