use std::borrow::Cow;

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
enum Row {
    Line(String),
    Field(String, String),
}

/// Bordered block of lines. `Field` rows are aligned on their longest label.
#[derive(Debug, Default, Clone)]
pub struct Panel {
    title: Option<String>,
    rows: Vec<Row>,
    style: PanelStyle,
}

impl Panel {
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        let line = line.into();
        for part in line.lines() {
            self.rows.push(Row::Line(part.to_string()));
        }
    }

    pub fn add_field(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.rows.push(Row::Field(label.into(), value.into()));
    }

    pub fn add_empty(&mut self) {
        self.rows.push(Row::Line(String::new()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let label_width = self
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::Field(label, _) => Some(visible_width(label)),
                Row::Line(_) => None,
            })
            .max()
            .unwrap_or(0);

        let mut lines: Vec<String> = Vec::with_capacity(self.rows.len() + 1);
        if let Some(title) = &self.title {
            lines.push(title.clone());
        }
        for row in &self.rows {
            match row {
                Row::Line(line) => lines.push(line.clone()),
                Row::Field(label, value) => {
                    let pad = label_width - visible_width(label);
                    lines.push(format!("{}{}  {}", label, " ".repeat(pad), value));
                }
            }
        }

        let inner_width = lines
            .iter()
            .map(|l| visible_width(l))
            .max()
            .unwrap_or(0)
            .saturating_add(2)
            .max(2);

        let h = BorderChar::Horizontal.render(supports_unicode).repeat(inner_width);
        let v = color_border(BorderChar::Vertical.render(supports_unicode), supports_color, self.style);

        let mut out = String::new();
        let top = format!(
            "{}{}{}",
            BorderChar::TopLeft.render(supports_unicode),
            h,
            BorderChar::TopRight.render(supports_unicode)
        );
        out.push_str(&color_border(&top, supports_color, self.style));
        out.push('\n');

        for line in &lines {
            let fill = inner_width - 1 - visible_width(line);
            out.push_str(&v);
            out.push(' ');
            out.push_str(line);
            out.push_str(&" ".repeat(fill));
            out.push_str(&v);
            out.push('\n');
        }

        let bottom = format!(
            "{}{}{}",
            BorderChar::BottomLeft.render(supports_unicode),
            h,
            BorderChar::BottomRight.render(supports_unicode)
        );
        out.push_str(&color_border(&bottom, supports_color, self.style));
        out.push('\n');
        out
    }
}

fn color_border(s: &str, supports_color: bool, style: PanelStyle) -> String {
    if !supports_color {
        return s.to_string();
    }

    let color = match style {
        PanelStyle::Info => theme::colors::INFO,
        PanelStyle::Success => theme::colors::SUCCESS,
        PanelStyle::Warning => theme::colors::WARNING,
        PanelStyle::Error => theme::colors::ERROR,
    };
    format!("{}", s.with(color))
}

fn visible_width(s: &str) -> usize {
    strip_ansi(s).width()
}

/// Remove CSI/OSC escape sequences so width is measured on printable text only
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.contains('\u{1b}') {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        if matches!(chars.peek(), Some('[') | Some(']')) {
            chars.next();
        }
        for next in chars.by_ref() {
            if next.is_ascii_alphabetic() {
                break;
            }
        }
    }

    Cow::Owned(out)
}
