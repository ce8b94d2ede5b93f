//! User-facing notices for partner operations.
//!
//! Only coarse, localized text leaves this module; error details stay in the log.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ru,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Which write operation a notice reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Text {
    SuccessTitle,
    ErrorTitle,
    Created,
    Updated,
    DuplicateName,
    CreateFailed,
    UpdateFailed,
}

fn text(locale: Locale, t: Text) -> &'static str {
    match (locale, t) {
        (Locale::Ru, Text::SuccessTitle) => "Успех",
        (Locale::Ru, Text::ErrorTitle) => "Ошибка",
        (Locale::Ru, Text::Created) => "Успех! Партнер создан",
        (Locale::Ru, Text::Updated) => "Успех! Данные обновлены",
        (Locale::Ru, Text::DuplicateName) => "Партнер с таким именем уже существует",
        (Locale::Ru, Text::CreateFailed) => "Не удалось создать партнера",
        (Locale::Ru, Text::UpdateFailed) => "Не удалось обновить данные партнера",
        (Locale::En, Text::SuccessTitle) => "Success",
        (Locale::En, Text::ErrorTitle) => "Error",
        (Locale::En, Text::Created) => "Success! Partner created",
        (Locale::En, Text::Updated) => "Success! Partner data updated",
        (Locale::En, Text::DuplicateName) => "A partner with this name already exists",
        (Locale::En, Text::CreateFailed) => "Failed to create partner",
        (Locale::En, Text::UpdateFailed) => "Failed to update partner data",
    }
}

impl Notice {
    fn info(locale: Locale, message: Text) -> Self {
        Notice {
            kind: NoticeKind::Info,
            title: text(locale, Text::SuccessTitle).to_string(),
            message: text(locale, message).to_string(),
        }
    }

    fn error(locale: Locale, message: Text) -> Self {
        Notice {
            kind: NoticeKind::Error,
            title: text(locale, Text::ErrorTitle).to_string(),
            message: text(locale, message).to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Map the outcome of a create or update to the notice shown to the user.
pub fn notice_for<T>(op: Operation, outcome: &Result<T, AppError>, locale: Locale) -> Notice {
    match (op, outcome) {
        (Operation::Create, Ok(_)) => Notice::info(locale, Text::Created),
        (Operation::Update, Ok(_)) => Notice::info(locale, Text::Updated),
        (_, Err(AppError::UniqueViolation(_))) => Notice::error(locale, Text::DuplicateName),
        (Operation::Create, Err(_)) => Notice::error(locale, Text::CreateFailed),
        (Operation::Update, Err(_)) => Notice::error(locale, Text::UpdateFailed),
    }
}
