//! Page layout of an exported transcript.
//!
//! Coordinates are millimetres on an A4 page, measured from the top edge.

use crate::export::font::{glyph_units, text_units, to_winansi, units_for_width};
use crate::models::{Message, Sender};

pub use crate::export::font::FontWeight;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MARGIN: f32 = 15.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH_MM - 2.0 * MARGIN;

const TITLE_Y: f32 = 20.0;
const DATE_Y: f32 = 28.0;
const RULE_Y: f32 = 32.0;
const BODY_START_Y: f32 = 45.0;
/// Cursor position on every page after the first.
pub const PAGE_TOP_Y: f32 = 20.0;
/// A new entry starts on a fresh page once the cursor is past this.
pub const ENTRY_BREAK_Y: f32 = 270.0;
/// A body line continues on a fresh page once the cursor is past this.
pub const LINE_BREAK_Y: f32 = 280.0;

const LABEL_ADVANCE: f32 = 7.0;
const LINE_ADVANCE: f32 = 6.0;
const ENTRY_GAP: f32 = 10.0;

const TITLE_SIZE: f32 = 20.0;
const DATE_SIZE: f32 = 10.0;
const LABEL_SIZE: f32 = 12.0;
pub const BODY_SIZE: f32 = 11.0;

const INK: Rgb8 = Rgb8(44, 62, 80);
const ACCENT: Rgb8 = Rgb8(230, 126, 34);
const BLACK: Rgb8 = Rgb8(0, 0, 0);
const MUTED: Rgb8 = Rgb8(100, 100, 100);
const RULE: Rgb8 = Rgb8(200, 200, 200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        weight: FontWeight,
        color: Rgb8,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        color: Rgb8,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub elements: Vec<Element>,
}

impl Page {
    /// Plain text of every text element, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text { text, .. } => Some(text.as_str()),
            Element::Rule { .. } => None,
        })
    }

    fn text(&mut self, text: impl Into<String>, y: f32, size: f32, weight: FontWeight, color: Rgb8) {
        self.elements.push(Element::Text {
            text: text.into(),
            x: MARGIN,
            y,
            size,
            weight,
            color,
        });
    }
}

/// Greedy word wrap measured with Helvetica metrics, so no line is wider
/// than `max_width_mm`. Explicit newlines are kept; words wider than a line
/// are split between characters.
pub fn wrap_text(text: &str, max_width_mm: f32, size_pt: f32, weight: FontWeight) -> Vec<String> {
    let limit = units_for_width(max_width_mm, size_pt);
    let fits = |line: &str| text_units(line, weight) as f32 <= limit;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            let mut word = word.to_string();

            while !fits(&word) {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let rest = word.split_off(split_point(&word, limit, weight));
                lines.push(std::mem::replace(&mut word, rest));
            }
            if word.is_empty() {
                continue;
            }

            if current.is_empty() {
                current = word;
            } else {
                let candidate = format!("{current} {word}");
                if fits(&candidate) {
                    current = candidate;
                } else {
                    lines.push(std::mem::replace(&mut current, word));
                }
            }
        }

        lines.push(current);
    }

    lines
}

/// Byte index of the longest prefix of `word` within `limit`; at least one
/// character is always taken.
fn split_point(word: &str, limit: f32, weight: FontWeight) -> usize {
    let mut used = 0;
    for (index, c) in word.char_indices() {
        used += glyph_units(c, weight);
        if used as f32 > limit && index > 0 {
            return index;
        }
    }
    word.len()
}

/// Lays out the header and every message, paginating as the cursor runs
/// down the page.
pub fn layout_transcript(title: &str, generated_on: &str, messages: &[Message]) -> Vec<Page> {
    let mut header = Page::default();
    header.text(to_winansi(title), TITLE_Y, TITLE_SIZE, FontWeight::Regular, INK);
    header.text(
        to_winansi(&format!("Generated on: {generated_on}")),
        DATE_Y,
        DATE_SIZE,
        FontWeight::Regular,
        MUTED,
    );
    header.elements.push(Element::Rule {
        x1: MARGIN,
        x2: PAGE_WIDTH_MM - MARGIN,
        y: RULE_Y,
        color: RULE,
    });

    let mut pages = vec![header];
    let mut y = BODY_START_Y;

    for message in messages {
        if y > ENTRY_BREAK_Y {
            pages.push(Page::default());
            y = PAGE_TOP_Y;
        }

        let color = match message.sender {
            Sender::Bot => INK,
            Sender::User => ACCENT,
        };
        let label = format!("{}:", message.sender.label());
        current_page(&mut pages).text(label, y, LABEL_SIZE, FontWeight::Bold, color);
        y += LABEL_ADVANCE;

        let body = to_winansi(&message.text);
        for line in wrap_text(&body, CONTENT_WIDTH, BODY_SIZE, FontWeight::Regular) {
            if y > LINE_BREAK_Y {
                pages.push(Page::default());
                y = PAGE_TOP_Y;
            }
            current_page(&mut pages).text(line, y, BODY_SIZE, FontWeight::Regular, BLACK);
            y += LINE_ADVANCE;
        }
        y += ENTRY_GAP;
    }

    pages
}

fn current_page(pages: &mut [Page]) -> &mut Page {
    let last = pages.len() - 1;
    &mut pages[last]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::font::text_width_mm;
    use crate::models::MessageId;

    fn msg(id: u64, sender: Sender, text: &str) -> Message {
        Message::new(MessageId(id), sender, text)
    }

    fn text_ys(page: &Page) -> Vec<f32> {
        page.elements
            .iter()
            .filter_map(|e| match e {
                Element::Text { y, .. } => Some(*y),
                Element::Rule { .. } => None,
            })
            .collect()
    }

    fn body_width(line: &str) -> f32 {
        text_width_mm(line, BODY_SIZE, FontWeight::Regular)
    }

    fn wrap_body(text: &str, width_mm: f32) -> Vec<String> {
        wrap_text(text, width_mm, BODY_SIZE, FontWeight::Regular)
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_body("File an FIR", CONTENT_WIDTH), vec!["File an FIR"]);
    }

    #[test]
    fn test_wrap_breaks_on_whitespace() {
        let width = body_width("the quick");
        let lines = wrap_body("the quick brown fox jumps over", width);

        assert_eq!(lines[0], "the quick");
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), "the quick brown fox jumps over");
        for line in &lines {
            assert!(body_width(line) <= width + 1e-3, "{line:?} too wide");
        }
    }

    #[test]
    fn test_wrap_keeps_newlines_and_blank_lines() {
        let lines = wrap_body("Step 1\n\nStep 2", CONTENT_WIDTH);
        assert_eq!(lines, vec!["Step 1", "", "Step 2"]);
        assert_eq!(wrap_body("", CONTENT_WIDTH), vec![""]);
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let url = "https://example.org/abcdefghij";
        let width = body_width("https://ex");
        let lines = wrap_body(&format!("see {url}"), width);

        assert_eq!(lines[0], "see");
        assert_eq!(lines[1..].concat(), url);
        for line in &lines {
            assert!(!line.is_empty());
            assert!(body_width(line) <= width + 1e-3, "{line:?} too wide");
        }
    }

    #[test]
    fn test_wrap_single_glyph_wider_than_line() {
        let lines = wrap_body("WW", 1.0);
        assert_eq!(lines, vec!["W", "W"]);
    }

    #[test]
    fn test_wrapped_capitals_stay_inside_the_margin() {
        let text = "SECTION 173 BNSS: INFORMATION IN COGNIZABLE CASES AND THE PROCEDURE FOR \
                    REGISTRATION OF AN FIR BY POLICE";
        let lines = wrap_body(text, CONTENT_WIDTH);

        assert!(lines.len() >= 2);
        for line in &lines {
            let right_edge = MARGIN + body_width(line);
            assert!(
                right_edge <= PAGE_WIDTH_MM - MARGIN + 1e-3,
                "{line:?} ends at {right_edge} mm"
            );
        }
    }

    #[test]
    fn test_wrap_never_exceeds_width() {
        let text = "Under Section 173 of the BNSS an officer in charge of a police station \
                    must record information relating to a cognizable offence, and a copy \
                    of the FIR has to be given to the informant free of cost.";
        for width in [5.0, 17.5, 40.0, CONTENT_WIDTH] {
            for line in wrap_body(text, width) {
                assert!(body_width(&line) <= width + 1e-3, "{line:?} wider than {width} mm");
            }
        }
    }

    #[test]
    fn test_typographic_punctuation_reaches_the_page() {
        let messages = [msg(1, Sender::Bot, "Don’t sign “blank” forms – ask for a copy…")];
        let pages = layout_transcript("T", "now", &messages);

        assert!(pages[0]
            .texts()
            .any(|t| t == "Don’t sign “blank” forms – ask for a copy…"));
    }

    #[test]
    fn test_unsupported_characters_become_question_marks() {
        let messages = [msg(1, Sender::Bot, "⚠️ Server connection failed.")];
        let pages = layout_transcript("T", "now", &messages);

        assert!(pages[0].texts().any(|t| t == "? Server connection failed."));
    }

    #[test]
    fn test_header_on_first_page() {
        let pages = layout_transcript("Justice AI - Legal Consultation", "19/10/2026", &[]);
        assert_eq!(pages.len(), 1);

        let texts: Vec<&str> = pages[0].texts().collect();
        assert_eq!(
            texts,
            vec!["Justice AI - Legal Consultation", "Generated on: 19/10/2026"]
        );
        assert!(pages[0]
            .elements
            .iter()
            .any(|e| matches!(e, Element::Rule { y, .. } if *y == RULE_Y)));
    }

    #[test]
    fn test_entries_are_labelled_by_sender() {
        let messages = [
            msg(1, Sender::Bot, "Greetings."),
            msg(2, Sender::User, "How do I file an RTI?"),
        ];
        let pages = layout_transcript("T", "now", &messages);

        let labels: Vec<(&str, Rgb8)> = pages[0]
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Text {
                    text,
                    weight: FontWeight::Bold,
                    color,
                    ..
                } => Some((text.as_str(), *color)),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec![("Justice AI:", INK), ("You:", ACCENT)]);

        let texts: Vec<&str> = pages[0].texts().collect();
        assert_eq!(
            &texts[2..],
            &["Justice AI:", "Greetings.", "You:", "How do I file an RTI?"]
        );
        assert_eq!(text_ys(&pages[0])[2..], [45.0, 52.0, 68.0, 75.0]);
    }

    #[test]
    fn test_many_entries_paginate() {
        let messages: Vec<Message> = (0..30)
            .map(|i| {
                let sender = if i % 2 == 0 { Sender::Bot } else { Sender::User };
                msg(i + 1, sender, "A short reply.")
            })
            .collect();
        let pages = layout_transcript("T", "now", &messages);

        assert!(pages.len() > 1);
        for page in &pages[1..] {
            assert_eq!(text_ys(page)[0], PAGE_TOP_Y);
        }
        for page in &pages {
            for y in text_ys(page) {
                assert!(y <= LINE_BREAK_Y, "element drawn at {y}");
            }
        }
        let labels = pages
            .iter()
            .flat_map(|p| p.texts())
            .filter(|t| *t == "You:" || *t == "Justice AI:")
            .count();
        assert_eq!(labels, 30);
    }

    #[test]
    fn test_long_message_continues_on_next_page() {
        let body = "word ".repeat(92 * 60);
        let messages = [msg(1, Sender::Bot, &body)];
        let pages = layout_transcript("T", "now", &messages);

        assert!(pages.len() >= 2);
        let body_lines = pages
            .iter()
            .flat_map(|p| p.elements.iter())
            .filter(|e| matches!(e, Element::Text { size, .. } if *size == BODY_SIZE))
            .count();
        assert_eq!(body_lines, wrap_body(&body, CONTENT_WIDTH).len());
        assert!(!pages[1].texts().any(|t| t == "Justice AI:"));
    }
}
