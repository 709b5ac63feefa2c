//! Terminal styles.
//!
//! Code asks for a semantic style (a status, a message level, a heading) and gets a
//! `console::Style`. `use_color` forces styling on or off; `None` leaves the decision
//! to `console`'s terminal detection.

use console::Style;
use tasklogapp::commands::MessageLevel;
use tasklogapp::model::TaskStatus;

fn finish(style: Style, use_color: Option<bool>) -> Style {
    match use_color {
        Some(c) => style.force_styling(c),
        None => style,
    }
}

pub fn status(status: TaskStatus, use_color: Option<bool>) -> Style {
    let style = match status {
        TaskStatus::New => Style::new(),
        TaskStatus::Completed => Style::new().green(),
        TaskStatus::Closed => Style::new().dim().strikethrough(),
    };
    finish(style, use_color)
}

pub fn level(level: MessageLevel, use_color: Option<bool>) -> Style {
    let style = match level {
        MessageLevel::Info => Style::new().cyan(),
        MessageLevel::Success => Style::new().green(),
    };
    finish(style, use_color)
}

pub fn heading(use_color: Option<bool>) -> Style {
    finish(Style::new().bold(), use_color)
}

/// Metadata such as locations and dates.
pub fn muted(use_color: Option<bool>) -> Style {
    finish(Style::new().color256(246).italic(), use_color)
}
