//! Host pages
//!
//! A host page is hand-written HTML holding empty mount points. Views fill a
//! mount point by replacing the inner content of the matching element; the
//! rest of the document is left byte-for-byte untouched.
//!
//! The scanner understands just enough HTML for that: tags with quoted or
//! bare attributes, comments, doctypes, void elements, and raw-text
//! `<script>`/`<style>` bodies.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case, take_till, take_till1, take_until, take_while1},
    character::complete::{anychar, char, multispace0, satisfy},
    combinator::{consumed, map, opt, peek, recognize, rest},
    multi::{many0, many_till},
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};
use std::fmt;
use std::ops::Range;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Element a view or controller writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountPoint {
    /// Element with this `id`
    Id(&'static str),
    /// First element carrying this class
    Class(&'static str),
}

impl MountPoint {
    fn matches(&self, attrs: &[Attribute]) -> bool {
        match self {
            MountPoint::Id(id) => attr_value(attrs, "id") == Some(*id),
            MountPoint::Class(class) => attr_value(attrs, "class")
                .map(|v| v.split_whitespace().any(|c| c == *class))
                .unwrap_or(false),
        }
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MountPoint::Id(id) => write!(f, "#{}", id),
            MountPoint::Class(class) => write!(f, ".{}", class),
        }
    }
}

/// A host page being filled in
#[derive(Debug, Clone)]
pub struct HostPage {
    markup: String,
}

impl HostPage {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Whether the page has an element for this mount point
    pub fn contains(&self, mount: MountPoint) -> bool {
        TagScanner::new(&self.markup).any(|tag| !tag.closing && mount.matches(&tag.attrs))
    }

    /// Replace the inner content of the mount element
    ///
    /// Returns false, leaving the page untouched, when the mount point is
    /// absent or cannot hold content.
    pub fn fill(&mut self, mount: MountPoint, content: &str) -> bool {
        let Some(range) = element_content(&self.markup, mount) else {
            return false;
        };

        let replacement = if content.is_empty() {
            String::new()
        } else {
            format!("\n{}\n", content)
        };
        self.markup.replace_range(range, &replacement);
        true
    }

    /// Inner content of the mount element, if present
    pub fn content_of(&self, mount: MountPoint) -> Option<&str> {
        element_content(&self.markup, mount).map(|range| &self.markup[range])
    }

    /// Add the `active` class to every `<nav>` link pointing at `current`
    ///
    /// Returns the number of links marked.
    pub fn highlight_nav(&mut self, current: &str) -> usize {
        let mut edits: Vec<(Range<usize>, String)> = Vec::new();
        let mut nav_depth = 0usize;

        for tag in TagScanner::new(&self.markup) {
            match (tag.name.as_str(), tag.closing) {
                ("nav", false) if tag.opens_element() => nav_depth += 1,
                ("nav", true) => nav_depth = nav_depth.saturating_sub(1),
                ("a", false) if nav_depth > 0 => {
                    if attr_value(&tag.attrs, "href") == Some(current) {
                        let mut attrs = tag.attrs.clone();
                        if add_class(&mut attrs, "active") {
                            edits.push((tag.start..tag.end, render_open_tag(&tag.name, &attrs)));
                        }
                    }
                }
                _ => {}
            }
        }

        let marked = edits.len();
        for (range, replacement) in edits.into_iter().rev() {
            self.markup.replace_range(range, &replacement);
        }
        marked
    }

    pub fn as_str(&self) -> &str {
        &self.markup
    }

    pub fn into_markup(self) -> String {
        self.markup
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Attribute {
    name: String,
    value: Option<String>,
}

#[derive(Debug)]
struct Tag {
    name: String,
    attrs: Vec<Attribute>,
    /// Byte offset of `<`
    start: usize,
    /// Byte offset just past `>`
    end: usize,
    closing: bool,
    self_closing: bool,
}

impl Tag {
    fn opens_element(&self) -> bool {
        !self.closing && !self.self_closing && !VOID_ELEMENTS.contains(&self.name.as_str())
    }
}

/// One `<...>` construct as seen by the scanner
#[derive(Debug, PartialEq)]
enum Token {
    /// Comment, doctype or processing instruction
    Skipped,
    Open {
        name: String,
        attrs: Vec<Attribute>,
        self_closing: bool,
    },
    Close {
        name: String,
    },
}

struct TagScanner<'a> {
    html: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    fn new(html: &'a str) -> Self {
        Self { html, pos: 0 }
    }

    fn offset(&self, rest: &str) -> usize {
        self.html.len() - rest.len()
    }
}

impl Iterator for TagScanner<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        loop {
            let remaining = self.html.get(self.pos..)?;
            let (at_tag, _) = take_until::<_, _, nom::error::Error<&str>>("<")(remaining).ok()?;
            let start = self.offset(at_tag);

            let (rest, token) = match parse_token(at_tag) {
                Ok(parsed) => parsed,
                Err(_) => {
                    // Stray `<` in text
                    self.pos = start + 1;
                    continue;
                }
            };
            let end = self.offset(rest);
            self.pos = end;

            let (name, attrs, closing, self_closing) = match token {
                Token::Skipped => continue,
                Token::Open {
                    name,
                    attrs,
                    self_closing,
                } => (name, attrs, false, self_closing),
                Token::Close { name } => (name, Vec::new(), true, false),
            };

            if !closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                self.pos = match raw_text(rest, &name) {
                    Ok((after, _)) => self.offset(after),
                    Err(_) => self.html.len(),
                };
            }

            return Some(Tag {
                name,
                attrs,
                start,
                end,
                closing,
                self_closing,
            });
        }
    }
}

/// Parse the construct starting at a `<`
fn parse_token(input: &str) -> IResult<&str, Token> {
    alt((
        map(parse_comment, |_| Token::Skipped),
        map(parse_declaration, |_| Token::Skipped),
        parse_close_tag,
        parse_open_tag,
    ))(input)
}

/// `<!-- ... -->`; an unterminated comment runs to the end of the page
fn parse_comment(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        tag("<!--"),
        alt((terminated(take_until("-->"), tag("-->")), rest)),
    ))(input)
}

/// `<!DOCTYPE ...>` and `<?...?>`
fn parse_declaration(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        alt((tag("<!"), tag("<?"))),
        take_till(|c: char| c == '>'),
        opt(char('>')),
    )))(input)
}

fn parse_tag_name(input: &str) -> IResult<&str, String> {
    map(
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-'),
        str::to_ascii_lowercase,
    )(input)
}

fn parse_close_tag(input: &str) -> IResult<&str, Token> {
    map(
        delimited(tag("</"), parse_tag_name, pair(take_till(|c: char| c == '>'), char('>'))),
        |name| Token::Close { name },
    )(input)
}

fn parse_open_tag(input: &str) -> IResult<&str, Token> {
    let (input, _) = char('<')(input)?;
    let (input, name) = parse_tag_name(input)?;
    let (input, (body, items)) =
        consumed(many0(preceded(multispace0, parse_attribute_item)))(input)?;
    let (input, _) = multispace0(input)?;
    let (input, _) = char('>')(input)?;

    Ok((
        input,
        Token::Open {
            name,
            attrs: items.into_iter().flatten().collect(),
            self_closing: body.trim_end().ends_with('/'),
        },
    ))
}

/// An attribute, or one stray character (such as a trailing `/`) to skip
fn parse_attribute_item(input: &str) -> IResult<&str, Option<Attribute>> {
    alt((
        map(parse_attribute, Some),
        map(satisfy(|c| c != '>'), |_| None),
    ))(input)
}

fn parse_attribute(input: &str) -> IResult<&str, Attribute> {
    let (input, name) = take_while1(|c: char| {
        !c.is_ascii_whitespace() && !matches!(c, '=' | '/' | '>' | '"' | '\'')
    })(input)?;
    let (input, value) = opt(preceded(
        tuple((multispace0, char('='), multispace0)),
        alt((parse_quoted, take_till1(|c: char| c.is_ascii_whitespace() || c == '>'))),
    ))(input)?;

    Ok((
        input,
        Attribute {
            name: name.to_ascii_lowercase(),
            value: value.map(str::to_string),
        },
    ))
}

fn parse_quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
    ))(input)
}

/// Body of a `<script>` or `<style>` element, up to its closing tag
fn raw_text<'a>(input: &'a str, name: &str) -> IResult<&'a str, &'a str> {
    recognize(many_till(
        anychar,
        peek(preceded(tag("</"), tag_no_case(name))),
    ))(input)
}

fn attr_value<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|a| a.name == name)
        .and_then(|a| a.value.as_deref())
}

/// Add a class token; false if it was already there
fn add_class(attrs: &mut Vec<Attribute>, class: &str) -> bool {
    match attrs.iter_mut().find(|a| a.name == "class") {
        Some(attr) => {
            let current = attr.value.clone().unwrap_or_default();
            if current.split_whitespace().any(|c| c == class) {
                return false;
            }
            attr.value = Some(if current.trim().is_empty() {
                class.to_string()
            } else {
                format!("{} {}", current.trim_end(), class)
            });
        }
        None => attrs.push(Attribute {
            name: "class".to_string(),
            value: Some(class.to_string()),
        }),
    }
    true
}

fn render_open_tag(name: &str, attrs: &[Attribute]) -> String {
    let mut tag = format!("<{}", name);
    for attr in attrs {
        match &attr.value {
            Some(value) => {
                tag.push_str(&format!(r#" {}="{}""#, attr.name, value.replace('"', "&quot;")))
            }
            None => tag.push_str(&format!(" {}", attr.name)),
        }
    }
    tag.push('>');
    tag
}

/// Inner byte range of the first element matching `mount`
fn element_content(html: &str, mount: MountPoint) -> Option<Range<usize>> {
    let mut scanner = TagScanner::new(html);
    let open = scanner
        .by_ref()
        .find(|tag| !tag.closing && mount.matches(&tag.attrs))?;
    if !open.opens_element() {
        return None;
    }

    let mut depth = 1usize;
    for tag in scanner {
        if tag.name != open.name {
            continue;
        }
        if tag.closing {
            depth -= 1;
            if depth == 0 {
                return Some(open.end..tag.start);
            }
        } else if tag.opens_element() {
            depth += 1;
        }
    }
    None
}
