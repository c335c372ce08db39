//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Action Identifiers
//!
//! Defines the `ActionType` enum, the closed set of identifiers that tag every
//! event the client dispatches (loading the user, loading expenses, submitting
//! a profile, ...). Each identifier carries a string value equal to its own
//! name. These values travel over the wire, so they must never change once
//! introduced.
//!
//! The bare string tokens are also exported from [`names`] for consumers that
//! only want a `&'static str`.

use enum_map::Enum;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{error::AppError, model::action_registry::ActionRegistry};

/// Organisational grouping of identifiers. Carries no behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Enum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    App,

    Expenses,

    Expense,

    Profile,

    NewExpense,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::App,
        Self::Expenses,
        Self::Expense,
        Self::Profile,
        Self::NewExpense,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'_ str = match self {
            Self::App => "App",
            Self::Expenses => "Expenses",
            Self::Expense => "Expense",
            Self::Profile => "Profile",
            Self::NewExpense => "New Expense",
        };

        write!(f, "{s}")
    }
}

/// Where an identifier sits in a request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// A request was issued.
    Requested,

    /// The request succeeded.
    Succeeded,

    /// The request failed.
    Failed,

    /// A plain event with no request lifecycle.
    Event,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'_ str = match self {
            Self::Requested => "requested",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Event => "event",
        };

        write!(f, "{s}")
    }
}

/// Declares every identifier exactly once: the enum variant, its exported
/// string token (always `stringify!` of the token name) and its category.
macro_rules! action_types {
    ($( $(#[$meta:meta])* $variant:ident => $name:ident, $category:ident; )+) => {
        /// String tokens for every action identifier.
        pub mod names {
            $( pub const $name: &str = stringify!($name); )+
        }

        /// A single action identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Enum, Serialize, Deserialize,
        )]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum ActionType {
            $( $(#[$meta])* $variant, )+
        }

        impl ActionType {
            /// Number of declared identifiers.
            pub const COUNT: usize = [$( stringify!($name) ),+].len();

            /// Every identifier in declaration order.
            pub const ALL: [ActionType; ActionType::COUNT] = [$( Self::$variant ),+];

            /// The wire token for this identifier.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => names::$name, )+
                }
            }

            #[must_use]
            pub const fn category(self) -> Category {
                match self {
                    $( Self::$variant => Category::$category, )+
                }
            }
        }
    };
}

action_types! {
    // App
    LoadUser => LOAD_USER, App;
    LoadUserSuccess => LOAD_USER_SUCCESS, App;
    LoadUserFail => LOAD_USER_FAIL, App;
    /// Set the title shown in the app bar.
    SetAppTitle => SET_APP_TITLE, App;

    // Expenses
    LoadExpenses => LOAD_EXPENSES, Expenses;
    LoadExpensesSuccess => LOAD_EXPENSES_SUCCESS, Expenses;
    LoadExpensesFail => LOAD_EXPENSES_FAIL, Expenses;

    // Expense
    LoadExpense => LOAD_EXPENSE, Expense;
    LoadExpenseSuccess => LOAD_EXPENSE_SUCCESS, Expense;
    LoadExpenseFail => LOAD_EXPENSE_FAIL, Expense;
    LoadExpenseComments => LOAD_EXPENSE_COMMENTS, Expense;
    LoadExpenseCommentsSuccess => LOAD_EXPENSE_COMMENTS_SUCCESS, Expense;
    LoadExpenseCommentsFail => LOAD_EXPENSE_COMMENTS_FAIL, Expense;

    // Profile
    LoadProfile => LOAD_PROFILE, Profile;
    LoadProfileSuccess => LOAD_PROFILE_SUCCESS, Profile;
    LoadProfileFail => LOAD_PROFILE_FAIL, Profile;
    /// A field of the profile form changed.
    ProfileModelChange => PROFILE_MODEL_CHANGE, Profile;
    ProfileSubmit => PROFILE_SUBMIT, Profile;
    ProfileSubmitSuccess => PROFILE_SUBMIT_SUCCESS, Profile;
    ProfileSubmitFail => PROFILE_SUBMIT_FAIL, Profile;

    // New expense
    LoadCommittees => LOAD_COMMITTEES, NewExpense;
    LoadCommitteesSuccess => LOAD_COMMITTEES_SUCCESS, NewExpense;
    LoadCommitteesFail => LOAD_COMMITTEES_FAIL, NewExpense;
    LoadCostCentres => LOAD_COST_CENTRES, NewExpense;
    LoadCostCentresSuccess => LOAD_COST_CENTRES_SUCCESS, NewExpense;
    LoadCostCentresFail => LOAD_COST_CENTRES_FAIL, NewExpense;
    /// A field of the new-expense form changed.
    NewExpenseModelChange => NEW_EXPENSE_MODEL_CHANGE, NewExpense;
    NewExpenseSubmit => NEW_EXPENSE_SUBMIT, NewExpense;
    NewExpenseSubmitSuccess => NEW_EXPENSE_SUBMIT_SUCCESS, NewExpense;
    NewExpenseSubmitFail => NEW_EXPENSE_SUBMIT_FAIL, NewExpense;
}

impl ActionType {
    /// The `[request, success, failure]` triple this identifier belongs to,
    /// or `None` for plain events.
    #[must_use]
    pub const fn family(self) -> Option<[Self; 3]> {
        let family = match self {
            Self::LoadUser | Self::LoadUserSuccess | Self::LoadUserFail => {
                [Self::LoadUser, Self::LoadUserSuccess, Self::LoadUserFail]
            }

            Self::LoadExpenses | Self::LoadExpensesSuccess | Self::LoadExpensesFail => [
                Self::LoadExpenses,
                Self::LoadExpensesSuccess,
                Self::LoadExpensesFail,
            ],

            Self::LoadExpense | Self::LoadExpenseSuccess | Self::LoadExpenseFail => [
                Self::LoadExpense,
                Self::LoadExpenseSuccess,
                Self::LoadExpenseFail,
            ],

            Self::LoadExpenseComments
            | Self::LoadExpenseCommentsSuccess
            | Self::LoadExpenseCommentsFail => [
                Self::LoadExpenseComments,
                Self::LoadExpenseCommentsSuccess,
                Self::LoadExpenseCommentsFail,
            ],

            Self::LoadProfile | Self::LoadProfileSuccess | Self::LoadProfileFail => [
                Self::LoadProfile,
                Self::LoadProfileSuccess,
                Self::LoadProfileFail,
            ],

            Self::ProfileSubmit | Self::ProfileSubmitSuccess | Self::ProfileSubmitFail => [
                Self::ProfileSubmit,
                Self::ProfileSubmitSuccess,
                Self::ProfileSubmitFail,
            ],

            Self::LoadCommittees | Self::LoadCommitteesSuccess | Self::LoadCommitteesFail => [
                Self::LoadCommittees,
                Self::LoadCommitteesSuccess,
                Self::LoadCommitteesFail,
            ],

            Self::LoadCostCentres | Self::LoadCostCentresSuccess | Self::LoadCostCentresFail => [
                Self::LoadCostCentres,
                Self::LoadCostCentresSuccess,
                Self::LoadCostCentresFail,
            ],

            Self::NewExpenseSubmit
            | Self::NewExpenseSubmitSuccess
            | Self::NewExpenseSubmitFail => [
                Self::NewExpenseSubmit,
                Self::NewExpenseSubmitSuccess,
                Self::NewExpenseSubmitFail,
            ],

            Self::SetAppTitle | Self::ProfileModelChange | Self::NewExpenseModelChange => {
                return None;
            }
        };

        Some(family)
    }

    #[must_use]
    pub fn phase(self) -> Phase {
        match self.family() {
            Some([request, ..]) if request == self => Phase::Requested,
            Some([_, success, _]) if success == self => Phase::Succeeded,
            Some(_) => Phase::Failed,
            None => Phase::Event,
        }
    }

    /// The identifier that starts this request lifecycle.
    #[must_use]
    pub fn request(self) -> Option<Self> {
        self.family().map(|[request, _, _]| request)
    }

    #[must_use]
    pub fn succeeded(self) -> Option<Self> {
        self.family().map(|[_, success, _]| success)
    }

    #[must_use]
    pub fn failed(self) -> Option<Self> {
        self.family().map(|[_, _, failure]| failure)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionRegistry::global().resolve(s)
    }
}

impl AsRef<str> for ActionType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
