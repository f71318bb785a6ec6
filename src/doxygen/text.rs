//! Reduce Doxygen description markup to plain text.
//!
//! Structure survives as line breaks and prefixes: list items become
//! `\n- ` lines, notes and see-also sections get `Note:` / `See:` labels.
//! Parameter lists and return sections are dropped here because the function
//! extractor pulls them out separately.

use crate::doxygen::tree::{Element, Node};
use regex::Regex;
use std::sync::LazyLock;

static RE_BLANKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Markup elements with special handling. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    Para,
    /// `ref`, `computeroutput`, `emphasis`, `bold`
    Inline,
    /// `itemizedlist`, `orderedlist`
    List,
    SimpleSect(SectKind),
    ParameterList,
    Other,
}

/// `kind` attribute of a `simplesect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectKind {
    Note,
    See,
    Return,
    Param,
    Other,
}

impl Markup {
    fn of(element: &Element) -> Self {
        match element.name.as_str() {
            "para" => Self::Para,
            "ref" | "computeroutput" | "emphasis" | "bold" => Self::Inline,
            "itemizedlist" | "orderedlist" => Self::List,
            "simplesect" => Self::SimpleSect(SectKind::of(element.attr("kind"))),
            "parameterlist" => Self::ParameterList,
            _ => Self::Other,
        }
    }
}

impl SectKind {
    fn of(kind: Option<&str>) -> Self {
        match kind {
            Some("note") => Self::Note,
            Some("see") => Self::See,
            Some("return") => Self::Return,
            Some("param") => Self::Param,
            _ => Self::Other,
        }
    }
}

/// Reduced, cleaned text of an optional element. A missing element is "".
pub fn description(element: Option<&Element>) -> String {
    element.map(reduce).unwrap_or_default()
}

/// Reduce the children of `element` to cleaned plain text.
pub fn reduce(element: &Element) -> String {
    let mut out = String::new();
    write_children(element, &mut out);
    clean(&out)
}

fn write_children(element: &Element, out: &mut String) {
    for node in &element.children {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(child) => write_element(child, out),
        }
    }
}

fn write_element(element: &Element, out: &mut String) {
    match Markup::of(element) {
        Markup::Para => {
            write_children(element, out);
            out.push(' ');
        }
        Markup::Inline => out.push_str(&element.text()),
        Markup::List => {
            for item in element.elements_named("listitem") {
                out.push_str("\n- ");
                write_children(item, out);
            }
        }
        Markup::SimpleSect(kind) => match kind {
            SectKind::Note => {
                out.push_str("\nNote: ");
                write_children(element, out);
            }
            SectKind::See => {
                out.push_str("\nSee: ");
                write_children(element, out);
            }
            SectKind::Return | SectKind::Param => {}
            SectKind::Other => write_children(element, out),
        },
        Markup::ParameterList => {}
        Markup::Other => write_children(element, out),
    }
}

/// Collapse blank runs, drop the space after each newline, trim.
pub fn clean(text: &str) -> String {
    let collapsed = RE_BLANKS.replace_all(text, " ");
    collapsed.replace("\n ", "\n").trim().to_string()
}

/// Merge a brief and a detailed description into one string.
///
/// Detailed text that already opens with the brief text (ignoring case)
/// is used alone.
pub fn combine(brief: &str, detailed: &str) -> String {
    let brief_blank = brief.trim().is_empty();
    let detailed_blank = detailed.trim().is_empty();

    match (brief_blank, detailed_blank) {
        (true, true) => String::new(),
        (true, false) => detailed.to_string(),
        (false, true) => brief.to_string(),
        (false, false) => {
            let repeats_brief = detailed
                .get(..brief.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(brief));
            if repeats_brief {
                detailed.to_string()
            } else {
                format!("{} {}", brief, detailed)
            }
        }
    }
}
