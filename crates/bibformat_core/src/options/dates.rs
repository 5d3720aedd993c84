/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DayFormat {
    /// "10"
    #[default]
    Plain,
    /// "10th"
    Ordinal,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MonthFormat {
    /// "February"
    #[default]
    Long,
    /// "Feb."
    Short,
    /// "2"
    Numeric,
    /// Names from `month-names`.
    User,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    #[default]
    DayMonth,
    MonthDay,
}

/// Day/month rendering for the `date` field.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DateOptions {
    pub day: DayFormat,
    pub day_leading_zero: bool,
    pub month: MonthFormat,
    pub order: DateOrder,
    /// Between day and month.
    pub separator: String,
    /// Twelve user-defined month names used with `month: user`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub month_names: Vec<String>,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            day: DayFormat::Plain,
            day_leading_zero: false,
            month: MonthFormat::Long,
            order: DateOrder::DayMonth,
            separator: " ".to_string(),
            month_names: Vec::new(),
        }
    }
}
