// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Entertainment,
    Utilities,
    Health,
    Shopping,
    Housing,
    Other,
}

impl ExpenseCategory {
    pub const fn all() -> [ExpenseCategory; 8] {
        [
            ExpenseCategory::Food,
            ExpenseCategory::Transport,
            ExpenseCategory::Entertainment,
            ExpenseCategory::Utilities,
            ExpenseCategory::Health,
            ExpenseCategory::Shopping,
            ExpenseCategory::Housing,
            ExpenseCategory::Other,
        ]
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Housing => "Housing",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Pill class used by the expense table.
    pub const fn display_color(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "bg-expense-food text-white",
            ExpenseCategory::Transport => "bg-expense-transport text-white",
            ExpenseCategory::Entertainment => "bg-expense-entertainment text-white",
            ExpenseCategory::Utilities => "bg-expense-utilities text-white",
            ExpenseCategory::Health => "bg-expense-health text-white",
            ExpenseCategory::Shopping => "bg-expense-shopping text-white",
            ExpenseCategory::Housing => "bg-expense-housing text-white",
            ExpenseCategory::Other => "bg-expense-other text-white",
        }
    }

    /// Slice colour used by the distribution chart.
    pub const fn fill_color(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "hsl(152, 57%, 58%)",
            ExpenseCategory::Transport => "hsl(199, 89%, 48%)",
            ExpenseCategory::Entertainment => "hsl(262, 83%, 58%)",
            ExpenseCategory::Utilities => "hsl(31, 89%, 56%)",
            ExpenseCategory::Health => "hsl(355, 78%, 56%)",
            ExpenseCategory::Shopping => "hsl(291, 64%, 42%)",
            ExpenseCategory::Housing => "hsl(228, 74%, 48%)",
            ExpenseCategory::Other => "hsl(210, 10%, 50%)",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for ExpenseCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ExpenseCategory::all()
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

// Lenient lookups: anything unrecognised renders with the Other colours.
// Storage never goes through these.
pub fn display_color_for_name(name: &str) -> &'static str {
    name.parse::<ExpenseCategory>()
        .unwrap_or(ExpenseCategory::Other)
        .display_color()
}

pub fn fill_color_for_name(name: &str) -> &'static str {
    name.parse::<ExpenseCategory>()
        .unwrap_or(ExpenseCategory::Other)
        .fill_color()
}
