//! Assistant replies are GitHub-flavored Markdown. This module parses them
//! into a small block/span model the terminal renderer consumes. Raw HTML is
//! never interpreted; it is demoted to literal text.

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Span>),
    Heading { level: u8, spans: Vec<Span> },
    CodeBlock { language: Option<String>, code: String },
    List { ordered: bool, items: Vec<Vec<Span>> },
    Quote(Vec<Span>),
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub link_url: Option<String>,
}

pub fn parse(input: &str) -> Vec<Block> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let mut walker = Walker::default();
    for event in Parser::new_ext(input, options) {
        walker.handle(event);
    }
    walker.finish()
}

#[derive(Default)]
struct Walker {
    blocks: Vec<Block>,
    spans: Vec<Span>,
    bold: bool,
    italic: bool,
    strikethrough: bool,
    link_url: Option<String>,
    heading: Option<u8>,
    code_block: Option<(Option<String>, String)>,
    // (ordered, collected items) per nesting level; nested lists are
    // flattened into their parent when they close
    lists: Vec<(bool, Vec<Vec<Span>>)>,
    quote_depth: u32,
}

impl Walker {
    fn handle(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some((_, code)) = self.code_block.as_mut() {
                    code.push_str(&text);
                } else {
                    self.push_span(text.to_string(), false);
                }
            }
            Event::Code(code) => self.push_span(code.to_string(), true),
            // Model output may contain markup; keep it inert.
            Event::Html(html) | Event::InlineHtml(html) => {
                self.push_span(html.to_string(), false)
            }
            Event::SoftBreak => self.push_span(" ".to_string(), false),
            Event::HardBreak => self.push_span("\n".to_string(), false),
            Event::Rule => {
                self.flush_paragraph();
                self.blocks.push(Block::Rule);
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag) {
        match tag {
            Tag::Strong => self.bold = true,
            Tag::Emphasis => self.italic = true,
            Tag::Strikethrough => self.strikethrough = true,
            Tag::Link { dest_url, .. } => self.link_url = Some(dest_url.to_string()),
            Tag::Heading { level, .. } => {
                self.flush_paragraph();
                self.heading = Some(heading_level(level));
            }
            Tag::CodeBlock(kind) => {
                self.flush_paragraph();
                let language = match kind {
                    pulldown_cmark::CodeBlockKind::Fenced(lang) => {
                        let lang = lang.trim().to_string();
                        (!lang.is_empty()).then_some(lang)
                    }
                    pulldown_cmark::CodeBlockKind::Indented => None,
                };
                self.code_block = Some((language, String::new()));
            }
            Tag::BlockQuote(_) => {
                self.flush_paragraph();
                self.quote_depth += 1;
            }
            Tag::List(start) => {
                self.flush_paragraph();
                self.lists.push((start.is_some(), Vec::new()));
            }
            Tag::Item => {
                // text pending from an enclosing item becomes its own entry
                let spans = std::mem::take(&mut self.spans);
                if !spans.is_empty() {
                    if let Some((_, items)) = self.lists.last_mut() {
                        items.push(spans);
                    }
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Strong => self.bold = false,
            TagEnd::Emphasis => self.italic = false,
            TagEnd::Strikethrough => self.strikethrough = false,
            TagEnd::Link => self.link_url = None,
            TagEnd::Paragraph => self.flush_paragraph(),
            TagEnd::Heading(_) => {
                let spans = std::mem::take(&mut self.spans);
                if let Some(level) = self.heading.take() {
                    self.blocks.push(Block::Heading { level, spans });
                }
            }
            TagEnd::CodeBlock => {
                if let Some((language, code)) = self.code_block.take() {
                    let code = code.trim_end_matches('\n').to_string();
                    self.blocks.push(Block::CodeBlock { language, code });
                }
            }
            TagEnd::BlockQuote(_) => {
                let spans = std::mem::take(&mut self.spans);
                self.quote_depth = self.quote_depth.saturating_sub(1);
                if !spans.is_empty() {
                    self.blocks.push(Block::Quote(spans));
                }
            }
            TagEnd::Item => {
                let spans = std::mem::take(&mut self.spans);
                if !spans.is_empty() {
                    if let Some((_, items)) = self.lists.last_mut() {
                        items.push(spans);
                    }
                }
            }
            TagEnd::List(_) => {
                if let Some((ordered, items)) = self.lists.pop() {
                    match self.lists.last_mut() {
                        // nested list: flatten its items into the parent
                        Some((_, parent_items)) => parent_items.extend(items),
                        None => self.blocks.push(Block::List { ordered, items }),
                    }
                }
            }
            _ => {}
        }
    }

    fn push_span(&mut self, text: String, code: bool) {
        self.spans.push(Span {
            text,
            bold: self.bold,
            italic: self.italic,
            strikethrough: self.strikethrough,
            code,
            link_url: self.link_url.clone(),
        });
    }

    fn flush_paragraph(&mut self) {
        if self.spans.is_empty() {
            return;
        }
        // inside a list the spans belong to the open item; Item end collects them
        if !self.lists.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.spans);
        if self.quote_depth > 0 {
            self.blocks.push(Block::Quote(spans));
        } else {
            self.blocks.push(Block::Paragraph(spans));
        }
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        self.blocks
    }
}

fn heading_level(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
