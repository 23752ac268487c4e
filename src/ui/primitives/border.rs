use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderChar {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Horizontal,
    Vertical,
}

impl BorderChar {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if !supports_unicode {
            return match self {
                BorderChar::TopLeft => theme::borders_ascii::TOP_LEFT,
                BorderChar::TopRight => theme::borders_ascii::TOP_RIGHT,
                BorderChar::BottomLeft => theme::borders_ascii::BOTTOM_LEFT,
                BorderChar::BottomRight => theme::borders_ascii::BOTTOM_RIGHT,
                BorderChar::Horizontal => theme::borders_ascii::HORIZONTAL,
                BorderChar::Vertical => theme::borders_ascii::VERTICAL,
            };
        }
        match self {
            BorderChar::TopLeft => theme::borders::TOP_LEFT,
            BorderChar::TopRight => theme::borders::TOP_RIGHT,
            BorderChar::BottomLeft => theme::borders::BOTTOM_LEFT,
            BorderChar::BottomRight => theme::borders::BOTTOM_RIGHT,
            BorderChar::Horizontal => theme::borders::HORIZONTAL,
            BorderChar::Vertical => theme::borders::VERTICAL,
        }
    }
}
