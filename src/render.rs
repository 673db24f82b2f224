//! Line-oriented display of a transcript body.

use std::io::Write;

/// How a single body line should be displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `# ` heading line.
    Title(&'a str),
    /// `###` chapter line.
    Header(&'a str),
    Text(&'a str),
    Blank,
}

impl<'a> Line<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            Line::Blank
        } else if let Some(rest) = line.strip_prefix("# ") {
            Line::Title(rest.trim())
        } else if let Some(rest) = line.strip_prefix("###") {
            Line::Header(rest.trim())
        } else {
            Line::Text(line.trim())
        }
    }
}

/// Split a transcript body into display lines.
pub fn lines(body: &str) -> impl Iterator<Item = Line<'_>> {
    body.split('\n').map(Line::classify)
}

/// Whether rendered output carries terminal colours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Paint {
    #[default]
    Plain,

    /// ANSI colours: bold blue banners and title, green chapters, white text.
    #[cfg(feature = "cli")]
    Color,
}

/// Display role of a rendered string; decides its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Banner,
    Chapter,
    Text,
}

impl Paint {
    #[cfg_attr(not(feature = "cli"), allow(unused_variables))]
    fn apply(self, role: Role, text: &str) -> String {
        match self {
            Paint::Plain => text.to_owned(),
            #[cfg(feature = "cli")]
            Paint::Color => {
                use crossterm::style::Stylize;

                match role {
                    Role::Banner => text.dark_blue().bold().to_string(),
                    Role::Chapter => text.dark_green().to_string(),
                    Role::Text => text.grey().to_string(),
                }
            }
        }
    }
}

/// Write the body for a terminal: 📺 before the title, 📌 before each chapter.
pub fn render<W: Write>(body: &str, w: W) -> std::io::Result<()> {
    render_with(body, w, Paint::Plain)
}

/// [`render`] with an explicit colour choice.
pub fn render_with<W: Write>(body: &str, mut w: W, paint: Paint) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", paint.apply(Role::Banner, "📄 Transcript Output:"))?;
    for line in lines(body) {
        match line {
            Line::Title(t) => writeln!(w, "{}", paint.apply(Role::Banner, &format!("📺 {t}")))?,
            Line::Header(h) => writeln!(w, "{}", paint.apply(Role::Chapter, &format!("📌 {h}")))?,
            Line::Text(t) => writeln!(w, "{}", paint.apply(Role::Text, t))?,
            Line::Blank => writeln!(w)?,
        }
    }
    w.flush()
}

/// Write the video description under its banner. A missing description prints an empty line.
pub fn render_description<W: Write>(
    description: Option<&str>,
    mut w: W,
    paint: Paint,
) -> std::io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", paint.apply(Role::Banner, "📝 Video Description:"))?;
    writeln!(w, "{}", paint.apply(Role::Text, description.unwrap_or_default()))?;
    w.flush()
}
