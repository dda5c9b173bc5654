use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::core::app_state::ConfigError;

/// Page presentation served at `/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageVariant {
    /// Centered input, plain styling, no history.
    #[default]
    Classic,
    /// Input in a left sidebar, history in the main column.
    Sidebar,
    /// Centered input with card styling and a running history.
    Chat,
}

/// Where the question form is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPlacement {
    Centered,
    Sidebar,
}

impl PageVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            PageVariant::Classic => "classic",
            PageVariant::Sidebar => "sidebar",
            PageVariant::Chat => "chat",
        }
    }

    /// Whether previous question/answer pairs are carried and displayed.
    pub fn keeps_history(self) -> bool {
        !matches!(self, PageVariant::Classic)
    }

    pub fn placement(self) -> InputPlacement {
        match self {
            PageVariant::Sidebar => InputPlacement::Sidebar,
            PageVariant::Classic | PageVariant::Chat => InputPlacement::Centered,
        }
    }

    /// Page stylesheet.
    pub fn stylesheet(self) -> &'static str {
        match self {
            PageVariant::Classic => CLASSIC_CSS,
            PageVariant::Sidebar => SIDEBAR_CSS,
            PageVariant::Chat => CHAT_CSS,
        }
    }
}

impl fmt::Display for PageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(PageVariant::Classic),
            "sidebar" => Ok(PageVariant::Sidebar),
            "chat" => Ok(PageVariant::Chat),
            _ => Err(ConfigError::UnknownVariant(s.to_string())),
        }
    }
}

const BASE_CSS: &str = "\
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif; margin: 0; color: #262730; }
.answer, .history-answer { white-space: pre-wrap; }
.notice { color: #8a6d3b; }
.error { color: #b00020; }
label { display: block; margin-bottom: .4rem; }
input[type=text] { width: 100%; box-sizing: border-box; padding: .5rem; font-size: 1rem; }
button { margin-top: .6rem; padding: .4rem 1rem; font-size: 1rem; }
";

const CLASSIC_CSS: &str = "\
main { max-width: 730px; margin: 3rem auto; padding: 0 1rem; }
";

const SIDEBAR_CSS: &str = "\
.layout { display: flex; min-height: 100vh; }
aside { width: 300px; background: #f0f2f6; padding: 2rem 1rem; }
main { flex: 1; padding: 2rem 3rem; }
.history li { margin-bottom: 1rem; }
";

const CHAT_CSS: &str = "\
body { background: linear-gradient(135deg, #eef2ff, #fdf2f8); }
main { max-width: 760px; margin: 3rem auto; padding: 2rem; background: #fff;
       border-radius: 16px; box-shadow: 0 8px 30px rgba(0,0,0,.08); }
h1 { color: #4338ca; }
.history { list-style: none; padding: 0; }
.history li { margin-bottom: 1rem; }
.history-question { background: #eef2ff; border-radius: 12px; padding: .6rem .9rem; }
.history-answer { background: #f8fafc; border-radius: 12px; padding: .6rem .9rem; margin-top: .3rem; }
";

/// Stylesheet shared by all variants.
pub fn base_stylesheet() -> &'static str {
    BASE_CSS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Sidebar ".parse::<PageVariant>().unwrap(), PageVariant::Sidebar);
        assert_eq!("CHAT".parse::<PageVariant>().unwrap(), PageVariant::Chat);
        assert!(matches!(
            "wide".parse::<PageVariant>(),
            Err(ConfigError::UnknownVariant(_))
        ));
    }

    #[test]
    fn only_classic_drops_history() {
        assert!(!PageVariant::Classic.keeps_history());
        assert!(PageVariant::Sidebar.keeps_history());
        assert!(PageVariant::Chat.keeps_history());
        assert_eq!(PageVariant::Sidebar.placement(), InputPlacement::Sidebar);
    }
}
