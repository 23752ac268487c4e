use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::panel::{Panel, PanelStyle};

/// Error panel shown when a run aborts
#[derive(Debug, Clone)]
pub struct FailureBlock {
    step: String,
    message: String,
    hint: Option<String>,
}

impl FailureBlock {
    pub fn new(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error("Deployment failed").bold().render(supports_color)
        );
        let mut panel = Panel::with_title(header).style(PanelStyle::Error);

        panel.add_empty();
        panel.add_field("Step", self.step.as_str());
        panel.add_empty();
        panel.add_line(self.message.as_str());

        if let Some(hint) = &self.hint {
            panel.add_empty();
            panel.add_line(format!(
                "{} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                hint
            ));
        }

        panel.render(supports_color, supports_unicode)
    }
}
