use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    #[default]
    #[serde(alias = "pilates")]
    FixedClass,
    #[serde(alias = "classpass")]
    CreditClass,
}

impl ActivityType {
    pub fn display_name(self) -> &'static str {
        match self {
            ActivityType::FixedClass => "Pilates",
            ActivityType::CreditClass => "ClassPass",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub cost: u32,
}

impl LogEntry {
    pub fn fixed_class() -> Self {
        Self {
            activity_type: ActivityType::FixedClass,
            cost: 1,
        }
    }

    pub fn credit_class(cost: u32) -> Self {
        Self {
            activity_type: ActivityType::CreditClass,
            cost,
        }
    }

    /// Text shown inside a calendar day cell.
    pub fn summary_label(&self) -> String {
        match self.activity_type {
            ActivityType::FixedClass => ActivityType::FixedClass.display_name().to_string(),
            ActivityType::CreditClass => format!("{} Credits", self.cost),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyLimits {
    pub fixed_class: i64,
    pub credit_class: i64,
}

pub const LIMITS: MonthlyLimits = MonthlyLimits {
    fixed_class: 5,
    credit_class: 50,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Remaining {
    pub fixed_remaining: i64,
    pub credits_remaining: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date_key: String,
    pub label: Option<String>,
    pub activity_type: Option<ActivityType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarView {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
    pub remaining: Remaining,
    pub limits: MonthlyLimits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalView {
    pub open: bool,
    pub date_key: Option<String>,
    pub title: String,
    pub activity_type: ActivityType,
    pub cost_draft: String,
    pub cost_input_visible: bool,
    pub delete_enabled: bool,
}

#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub calendar: CalendarView,
    pub modal: ModalView,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub delta: i32,
}

#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    #[serde(default)]
    pub confirmed: bool,
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct OpenDayRequest {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Deserialize)]
pub struct SelectActivityRequest {
    pub activity_type: ActivityType,
}

#[derive(Debug, Default, Deserialize)]
pub struct SaveRequest {
    pub cost_draft: Option<String>,
}
