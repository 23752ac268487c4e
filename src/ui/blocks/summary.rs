use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Success panel closing a deployment: record fields, where it was
/// written, and what to do next
#[derive(Debug, Clone)]
pub struct DeploymentSummary {
    title: String,
    fields: Vec<(String, String)>,
    record_path: Option<String>,
    next_steps: Vec<String>,
}

impl DeploymentSummary {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            record_path: None,
            next_steps: Vec::new(),
        }
    }

    pub fn add_field(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.push((label.into(), value.into()));
    }

    pub fn with_record_path(&mut self, path: impl Into<String>) {
        self.record_path = Some(path.into());
    }

    pub fn with_next_steps(&mut self, steps: &[String]) {
        self.next_steps = steps.to_vec();
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let mut panel = Panel::with_title(header).style(PanelStyle::Success);
        panel.add_empty();
        for (label, value) in &self.fields {
            panel.add_field(label.as_str(), value.as_str());
        }

        if let Some(path) = &self.record_path {
            panel.add_empty();
            panel.add_line(format!(
                "{} {} {}",
                Icon::Record.colored(supports_color, supports_unicode),
                ColoredText::dim("Saved to").render(supports_color),
                path
            ));
        }

        if !self.next_steps.is_empty() {
            panel.add_empty();
            panel.add_line(ColoredText::dim("Next steps:").render(supports_color));
            for (i, step) in self.next_steps.iter().enumerate() {
                panel.add_line(format!("  {}. {}", i + 1, step));
            }
        }

        panel.render(supports_color, supports_unicode)
    }
}
