use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Arrow,
    Deploy,
    Verify,
    Record,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Success => theme::icons::SUCCESS,
                Icon::Error => theme::icons::ERROR,
                Icon::Warning => theme::icons::WARNING,
                Icon::Progress => theme::icons::PROGRESS,
                Icon::Pending => theme::icons::PENDING,
                Icon::Arrow => theme::icons::ARROW,
                Icon::Deploy => theme::icons::DEPLOY,
                Icon::Verify => theme::icons::VERIFY,
                Icon::Record => theme::icons::RECORD,
            }
        } else {
            match self {
                Icon::Success => theme::icons_ascii::SUCCESS,
                Icon::Error => theme::icons_ascii::ERROR,
                Icon::Warning => theme::icons_ascii::WARNING,
                Icon::Progress => theme::icons_ascii::PROGRESS,
                Icon::Pending => theme::icons_ascii::PENDING,
                Icon::Arrow => theme::icons_ascii::ARROW,
                Icon::Deploy => theme::icons_ascii::DEPLOY,
                Icon::Verify => theme::icons_ascii::VERIFY,
                Icon::Record => theme::icons_ascii::RECORD,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success | Icon::Record => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Deploy | Icon::Verify => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
