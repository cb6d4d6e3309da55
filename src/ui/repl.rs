use std::io::Write;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::render;
use crate::config;
use crate::services::{ChatController, Preferences, Storage, SubmitOutcome};

/// Line-oriented front end. Plain input is a prompt for the assistant; slash
/// commands cover the portfolio sections and preferences.
pub struct Repl {
    controller: ChatController,
    preferences: Preferences,
    storage: Storage,
    assistant_ready: bool,
}

enum Action {
    Continue,
    Quit,
}

impl Repl {
    pub fn new(
        controller: ChatController,
        preferences: Preferences,
        storage: Storage,
        assistant_ready: bool,
    ) -> Self {
        Self {
            controller,
            preferences,
            storage,
            assistant_ready,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        println!("{}", render::banner());
        if !self.assistant_ready {
            println!(
                "{}\n",
                format!(
                    "{} is not set; chat replies are unavailable until it is.",
                    config::API_KEY_ENV
                )
                .dimmed()
            );
        }

        print!("{}", render::conversation(self.controller.store().messages()));
        if self.controller.store().len() == 1 {
            println!("{}", render::example_prompts());
        }

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{} ", self.prompt_glyph());
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break; // stdin closed
            };
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            let action = match input.strip_prefix('/') {
                Some(command) => self.run_command(command).await?,
                None => {
                    self.chat(input).await?;
                    Action::Continue
                }
            };
            if matches!(action, Action::Quit) {
                break;
            }
        }

        Ok(())
    }

    fn prompt_glyph(&self) -> &'static str {
        if self.preferences.cursor_enabled {
            "\u{276f}"
        } else {
            ">"
        }
    }

    async fn run_command(&mut self, command: &str) -> Result<Action> {
        match command {
            "quit" | "exit" => return Ok(Action::Quit),
            "help" => println!("{}\n", render::help()),
            "about" => println!("{}\n", render::about()),
            "experience" => println!("{}\n", render::experience()),
            "skills" => println!("{}\n", render::skills()),
            "lab" => println!("{}\n", render::lab()),
            "compass" => println!("{}\n", render::compass()),
            "clear" => {
                if self.controller.clear().await? {
                    println!(
                        "{}",
                        render::conversation(self.controller.store().messages())
                    );
                    println!("{}", render::example_prompts());
                }
            }
            "deep" => {
                let enable = !self.preferences.deep_thought;
                self.preferences
                    .set_deep_thought(&self.storage, enable)
                    .await?;
                let state = if enable { "on" } else { "off" };
                println!("Deep thought {state}.");
                if enable && !self.preferences.tooltip_dismissed {
                    println!("{}", config::DEEP_THOUGHT_HINT.dimmed());
                    self.preferences.dismiss_tooltip(&self.storage).await?;
                }
                println!();
            }
            "cursor" => {
                let enable = !self.preferences.cursor_enabled;
                self.preferences
                    .set_cursor_enabled(&self.storage, enable)
                    .await?;
            }
            unknown => println!(
                "{}\n",
                format!("Unknown command /{unknown}; try /help.").dimmed()
            ),
        }
        Ok(Action::Continue)
    }

    async fn chat(&mut self, input: &str) -> Result<()> {
        let outcome = self
            .controller
            .submit(input, self.preferences.deep_thought)
            .await?;
        if outcome != SubmitOutcome::Started {
            return Ok(());
        }

        println!("{}", "assistant".bold().cyan());
        let mut sources = None;
        while let Some(fragment) = self.controller.next_fragment().await? {
            if let Some(text) = &fragment.text {
                print!("{text}");
                std::io::stdout().flush()?;
            }
            if fragment.sources.is_some() {
                sources = fragment.sources;
            }
        }
        println!();

        if let Some(list) = sources.filter(|l| !l.is_empty()) {
            println!("{}", render::sources(&list));
        }
        println!();
        Ok(())
    }
}
