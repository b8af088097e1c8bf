// Contents screen: the fixed chapter list of the textbook plus its
// appendices. Nothing here is read from the uploaded file; the table is
// shipped with the binary.

use crate::router::{Route, Router};
use crate::style::{Palette, Tone};
use serde::Serialize;
use std::io::{self, Write};

/// One chapter row. A `page` of 0 means the chapter has no printed page
/// (web-only content) and the page column is left out.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry {
    pub chapter: u32,
    pub title: &'static str,
    pub page: u32,
}

impl TocEntry {
    const fn new(chapter: u32, title: &'static str, page: u32) -> Self {
        TocEntry { chapter, title, page }
    }

    /// The page to display, if any.
    pub fn page_reference(&self) -> Option<u32> {
        (self.page > 0).then_some(self.page)
    }
}

pub const TABLE_OF_CONTENTS: [TocEntry; 16] = [
    TocEntry::new(1, "Relativity I", 1),
    TocEntry::new(2, "Relativity II", 41),
    TocEntry::new(3, "The Quantum Theory of Light", 65),
    TocEntry::new(4, "The Particle Nature of Matter", 106),
    TocEntry::new(5, "Matter Waves", 151),
    TocEntry::new(6, "Quantum Mechanics in One Dimension", 191),
    TocEntry::new(7, "Tunneling Phenomena", 231),
    TocEntry::new(8, "Quantum Mechanics in Three Dimensions", 260),
    TocEntry::new(9, "Atomic Structure", 295),
    TocEntry::new(10, "Statistical Physics", 334),
    TocEntry::new(11, "Molecular Structure", 372),
    TocEntry::new(12, "The Solid State", 404),
    TocEntry::new(13, "Nuclear Structure", 463),
    TocEntry::new(14, "Nuclear Physics Applications", 503),
    TocEntry::new(15, "Elementary Particles", 547),
    TocEntry::new(16, "Cosmology (Web Only)", 0),
];

pub const APPENDICES: [&str; 4] = [
    "Appendix A Best Known Values for Physical Constants A.1",
    "Appendix B Table of Selected Atomic Masses A.2",
    "Appendix C Nobel Prizes A.7",
    "Answers to Odd-Numbered Problems A.12",
];

const LABEL_WIDTH: usize = 11;
const TITLE_WIDTH: usize = 40;

/// Shape of the JSON export.
#[derive(Serialize)]
struct ContentsExport<'a> {
    chapters: &'a [TocEntry],
    appendices: &'a [&'a str],
}

/// Format one chapter row without styling. The page column is omitted
/// when the entry has no page reference.
pub fn chapter_row(entry: &TocEntry) -> String {
    let label = format!("Chapter {}", entry.chapter);
    match entry.page_reference() {
        Some(page) => format!(
            "{:<lw$}{:<tw$}{:>5}",
            label,
            entry.title,
            page,
            lw = LABEL_WIDTH,
            tw = TITLE_WIDTH
        ),
        None => format!("{:<lw$}{}", label, entry.title, lw = LABEL_WIDTH),
    }
}

/// Serialise the full table, chapters then appendices, as pretty JSON.
pub fn contents_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ContentsExport {
        chapters: &TABLE_OF_CONTENTS,
        appendices: &APPENDICES,
    })
}

/// The contents screen itself carries no state; it only renders the fixed
/// table and offers the way back.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContentsScreen;

impl ContentsScreen {
    pub fn render<W: Write>(&self, out: &mut W, palette: Palette) -> io::Result<()> {
        writeln!(out, "{}", palette.paint("← Back to Upload", Tone::Accent))?;
        writeln!(out)?;
        writeln!(out, "{}", palette.paint("Table of Contents", Tone::Heading))?;
        writeln!(out)?;
        for entry in TABLE_OF_CONTENTS.iter() {
            let row = chapter_row(entry);
            // Chapter label in accent, the rest as body text.
            let (label, rest) = row.split_at(LABEL_WIDTH.min(row.len()));
            writeln!(
                out,
                "  {}{}",
                palette.paint(label, Tone::Accent),
                palette.paint(rest, Tone::Body)
            )?;
        }
        writeln!(out)?;
        writeln!(out, "{}", palette.paint("Appendices", Tone::Heading))?;
        writeln!(out)?;
        for appendix in APPENDICES.iter() {
            writeln!(out, "  {}", palette.paint(appendix, Tone::Body))?;
        }
        Ok(())
    }

    /// Return to the upload screen.
    pub fn back(&self, router: &mut Router) {
        router.navigate(Route::Upload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered() -> String {
        let mut buf = Vec::new();
        ContentsScreen.render(&mut buf, Palette::Plain).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn chapters_are_numbered_in_order() {
        for (i, entry) in TABLE_OF_CONTENTS.iter().enumerate() {
            assert_eq!(entry.chapter as usize, i + 1);
        }
    }

    #[test]
    fn only_web_only_chapter_lacks_a_page() {
        let without: Vec<_> = TABLE_OF_CONTENTS
            .iter()
            .filter(|e| e.page_reference().is_none())
            .collect();
        assert_eq!(without.len(), 1);
        assert_eq!(without[0].chapter, 16);
        assert_eq!(without[0].title, "Cosmology (Web Only)");
    }

    #[test]
    fn chapter_row_shows_page_when_present() {
        let row = chapter_row(&TABLE_OF_CONTENTS[14]);
        assert!(row.starts_with("Chapter 15"));
        assert!(row.contains("Elementary Particles"));
        assert!(row.trim_end().ends_with("547"));
    }

    #[test]
    fn chapter_row_hides_zero_page() {
        let row = chapter_row(&TABLE_OF_CONTENTS[15]);
        assert_eq!(row, "Chapter 16 Cosmology (Web Only)");
    }

    #[test]
    fn render_lists_every_chapter_then_appendices() {
        let text = rendered();
        let chapter_lines: Vec<_> = text
            .lines()
            .filter(|l| l.trim_start().starts_with("Chapter "))
            .collect();
        assert_eq!(chapter_lines.len(), 16);
        for (line, entry) in chapter_lines.iter().zip(TABLE_OF_CONTENTS.iter()) {
            assert!(line.contains(entry.title));
            match entry.page_reference() {
                Some(page) => assert!(line.trim_end().ends_with(&page.to_string())),
                None => assert!(line.trim_end().ends_with(entry.title)),
            }
        }

        let heading = text.find("Appendices").unwrap();
        let mut last = heading;
        for appendix in APPENDICES.iter() {
            let at = text.find(appendix).unwrap();
            assert!(at > last);
            last = at;
        }
    }

    #[test]
    fn plain_render_has_no_escape_codes() {
        assert!(!rendered().contains('\u{1b}'));
    }

    #[test]
    fn json_export_keeps_order_and_zero_page() {
        let value: serde_json::Value = serde_json::from_str(&contents_json().unwrap()).unwrap();
        let chapters = value["chapters"].as_array().unwrap();
        assert_eq!(chapters.len(), 16);
        assert_eq!(chapters[0]["title"], "Relativity I");
        assert_eq!(chapters[15]["page"], 0);
        assert_eq!(value["appendices"][3], "Answers to Odd-Numbered Problems A.12");
    }

    #[test]
    fn back_returns_to_upload() {
        let mut router = Router::starting_at(Route::Contents);
        ContentsScreen.back(&mut router);
        assert_eq!(router.current(), Route::Upload);
    }
}
