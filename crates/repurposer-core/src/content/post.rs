use crate::{Error, Result};

const UNTITLED: &str = "Untitled Blog Post";
const PREAMBLE_HEADING: &str = "Introduction";

/// A `## ` section of a blog post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// A markdown blog post with its title and sections pulled out
#[derive(Debug, Clone)]
pub struct BlogPost {
    text: String,
    title: String,
    sections: Vec<Section>,
}

fn strip_heading(line: &str) -> String {
    line.trim_start_matches(['#', ' ']).trim().to_string()
}

impl BlogPost {
    /// Parse markdown text. Blank input is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.replace("\r\n", "\n");
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }

        let title = extract_title(&text);
        let sections = extract_sections(&text);

        Ok(Self {
            text,
            title,
            sections,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Section headings in order of appearance
    pub fn outline(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.heading.clone()).collect()
    }

    /// Blank-line separated paragraphs of the raw text
    pub fn paragraphs(&self) -> Vec<&str> {
        self.text.split("\n\n").collect()
    }
}

fn extract_title(text: &str) -> String {
    text.lines()
        .find(|line| line.starts_with("# "))
        .map(strip_heading)
        .unwrap_or_else(|| UNTITLED.to_string())
}

fn extract_sections(text: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut heading: Option<String> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.starts_with("## ") {
            push_section(&mut sections, heading.take(), &body);
            heading = Some(strip_heading(line));
            body.clear();
        } else if heading.is_none() && line.starts_with("# ") {
            // title line
            continue;
        } else {
            body.push(line);
        }
    }
    push_section(&mut sections, heading, &body);

    sections
}

fn push_section(sections: &mut Vec<Section>, heading: Option<String>, body: &[&str]) {
    let body = body.join("\n").trim().to_string();
    match heading {
        Some(heading) => sections.push(Section { heading, body }),
        None if !body.is_empty() => sections.push(Section {
            heading: PREAMBLE_HEADING.to_string(),
            body,
        }),
        None => {}
    }
}
