//! ANSI rendering: markdown blocks, portfolio sections, and the message log.
//! Pure string building; printing is the REPL's job.

use colored::Colorize;
use url::Url;

use crate::config;
use crate::content;
use crate::models::{GroundingSource, Message, Sender};
use crate::services::markdown::{self, Block, Span};

pub fn banner() -> String {
    format!(
        "{}\n{}\n{}\n{}\n\n{}\n\n{}\n",
        content::profile::NAME.bold(),
        content::profile::ROLE.cyan(),
        content::profile::TAGLINE.italic(),
        content::profile::LOCATION.dimmed(),
        content::profile::SUMMARY,
        "Ask anything about Anmol, or type /help for commands.".dimmed()
    )
}

pub fn help() -> String {
    let commands = [
        ("/about", "who Anmol is"),
        ("/experience", "roles and impact"),
        ("/skills", "technical toolkit"),
        ("/lab", "selected projects"),
        ("/compass", "practices and principles"),
        ("/deep", "toggle deep-thought mode"),
        ("/cursor", "toggle the fancy prompt"),
        ("/clear", "reset the conversation"),
        ("/quit", "leave"),
    ];
    commands
        .iter()
        .map(|(name, what)| format!("  {:<12} {}", name.bold(), what))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn example_prompts() -> String {
    let mut out = String::from("Not sure where to start?\n");
    for prompt in config::EXAMPLE_PROMPTS {
        out.push_str(&format!("  {} {}\n", "\u{2022}".dimmed(), prompt.italic()));
    }
    out
}

pub fn conversation(messages: &[Message]) -> String {
    messages
        .iter()
        .map(message)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn message(msg: &Message) -> String {
    match msg.sender {
        Sender::User => format!("{} {}\n", "you".bold().green(), msg.text),
        Sender::Assistant => {
            let mut out = format!("{}\n{}\n", "assistant".bold().cyan(), markdown_text(&msg.text));
            if let Some(list) = msg.sources.as_deref() {
                if !list.is_empty() {
                    out.push_str(&sources(list));
                    out.push('\n');
                }
            }
            out
        }
    }
}

pub fn sources(list: &[GroundingSource]) -> String {
    let mut out = format!("{}\n", "Sources".bold());
    for source in list {
        let origin = Url::parse(&source.uri)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
        match origin {
            Some(host) => out.push_str(&format!(
                "  {} {} {}\n",
                "\u{2022}".dimmed(),
                source.title,
                format!("({host})").dimmed()
            )),
            None => out.push_str(&format!("  {} {}\n", "\u{2022}".dimmed(), source.title)),
        }
    }
    out.pop();
    out
}

pub fn markdown_text(text: &str) -> String {
    blocks(&markdown::parse(text))
}

fn blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn block(block: &Block) -> String {
    match block {
        Block::Paragraph(line) => spans(line),
        Block::Heading { spans: line, .. } => spans(line).bold().underline().to_string(),
        Block::CodeBlock { language, code } => {
            let mut out = String::new();
            if let Some(lang) = language {
                out.push_str(&format!("  {}\n", lang.dimmed()));
            }
            let body = code
                .lines()
                .map(|l| format!("  {}", l.yellow()))
                .collect::<Vec<_>>()
                .join("\n");
            out.push_str(&body);
            out
        }
        Block::List { ordered, items } => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if *ordered {
                    format!("{}.", i + 1)
                } else {
                    "\u{2022}".to_string()
                };
                format!("  {} {}", marker.dimmed(), spans(item))
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Block::Quote(line) => format!("  {} {}", "\u{2502}".dimmed(), spans(line).italic()),
        Block::Rule => "\u{2500}".repeat(32).dimmed().to_string(),
    }
}

fn spans(spans: &[Span]) -> String {
    spans.iter().map(span).collect()
}

fn span(span: &Span) -> String {
    let mut styled = span.text.normal();
    if span.code {
        styled = styled.yellow();
    }
    if span.bold {
        styled = styled.bold();
    }
    if span.italic {
        styled = styled.italic();
    }
    if span.strikethrough {
        styled = styled.strikethrough();
    }
    match &span.link_url {
        Some(url) => format!("{} {}", styled.underline(), format!("({url})").dimmed()),
        None => styled.to_string(),
    }
}

// --- Portfolio sections ---

pub fn about() -> String {
    format!(
        "{}\n{}\n\n{}\n\n{}",
        content::profile::NAME.bold(),
        content::profile::ROLE.cyan(),
        content::profile::SUMMARY,
        content::profile::LOCATION.dimmed()
    )
}

pub fn experience() -> String {
    content::EXPERIENCES
        .iter()
        .map(|entry| {
            let mut out = format!(
                "{} \u{2014} {} {}\n",
                entry.role.bold(),
                entry.company.cyan(),
                format!("({})", entry.period).dimmed()
            );
            for point in entry.points {
                out.push_str(&format!("  {} {}\n", "\u{2022}".dimmed(), point));
            }
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn skills() -> String {
    format!(
        "{}\n{}",
        "Toolkit".bold(),
        content::SKILLS.join(" \u{00b7} ")
    )
}

pub fn lab() -> String {
    content::PROJECTS
        .iter()
        .map(|project| {
            format!(
                "{}\n{}\n  {}\n  {}\n",
                project.title.bold(),
                project.description,
                project.tech.join(" \u{00b7} ").dimmed(),
                project.repo_url.underline()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn compass() -> String {
    content::PRINCIPLES
        .iter()
        .map(|principle| {
            format!(
                "{} \u{2014} {}",
                principle.title.bold(),
                principle.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_show_host() {
        let rendered = sources(&[GroundingSource {
            uri: "https://docs.example.org/page".into(),
            title: "Example Docs".into(),
        }]);
        assert!(rendered.contains("Example Docs"));
        assert!(rendered.contains("docs.example.org"));
    }

    #[test]
    fn sources_tolerate_unparseable_uri() {
        let rendered = sources(&[GroundingSource {
            uri: "not a uri".into(),
            title: "Still shown".into(),
        }]);
        assert!(rendered.contains("Still shown"));
    }

    #[test]
    fn sections_render_their_data() {
        assert!(about().contains("Jb Anmol"));
        assert!(experience().contains("Kidaura"));
        assert!(skills().contains("scikit-learn"));
        assert!(lab().contains("Clinical Analytics Pipeline"));
        assert!(compass().contains("Hatha Yoga"));
    }

    #[test]
    fn markdown_paragraphs_and_lists_render() {
        let rendered = markdown_text("intro\n\n- one\n- two");
        assert!(rendered.contains("intro"));
        assert!(rendered.contains("one"));
        assert!(rendered.contains("two"));
    }
}
