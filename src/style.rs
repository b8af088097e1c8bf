// Terminal styling. Screens describe text by its role (`Tone`) and the
// palette decides whether that becomes ANSI colour or stays plain.

use crossterm::style::{style, Attribute, Color, Stylize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Plain,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Accent,
    Body,
    Muted,
    /// Drop zone while a file hovers over it.
    Highlight,
    Error,
}

impl Palette {
    pub fn paint(self, text: &str, tone: Tone) -> String {
        if self == Palette::Plain {
            return text.to_string();
        }
        let styled = style(text);
        match tone {
            Tone::Heading => styled.with(Color::Magenta).attribute(Attribute::Bold).to_string(),
            Tone::Accent => styled.with(Color::Blue).attribute(Attribute::Bold).to_string(),
            Tone::Body => styled.with(Color::White).to_string(),
            Tone::Muted => styled.with(Color::DarkGrey).to_string(),
            Tone::Highlight => styled.with(Color::Cyan).attribute(Attribute::Bold).to_string(),
            Tone::Error => styled.with(Color::Red).attribute(Attribute::Bold).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_untouched() {
        assert_eq!(Palette::Plain.paint("Appendices", Tone::Heading), "Appendices");
    }

    #[test]
    fn color_wraps_text_in_escapes() {
        let painted = Palette::Color.paint("Appendices", Tone::Heading);
        assert!(painted.contains("Appendices"));
        assert!(painted.starts_with('\u{1b}'));
    }
}
