use deploy_recorder::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::panel::{Panel, PanelStyle};

#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    /// One block listing every unknown key found while loading the config
    pub fn from_config_warnings(warnings: &[ConfigWarning]) -> Self {
        let mut block = Self::new("Unknown config keys ignored");
        for warning in warnings {
            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            let mut line = format!("'{}' in {}", warning.key, location);
            if let Some(suggestion) = &warning.suggestion {
                line.push_str(&format!(" (did you mean '{}'?)", suggestion));
            }
            block.add_line(line);
        }
        block
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            self.title
        );
        let mut panel = Panel::with_title(header).style(PanelStyle::Warning);
        for line in &self.lines {
            panel.add_line(line.as_str());
        }
        panel.render(supports_color, supports_unicode)
    }
}
