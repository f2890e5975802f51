//! Application state - drives the text effects against the wall clock

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use std::thread;
use typewriter::{CursorBlink, SharedText, TextReveal, Typewriter};

use crate::config::Config;
use crate::theme::Theme;

/// A terminal row redrawn in place
pub struct TerminalLine<W: Write> {
    out: W,
}

impl<W: Write> TerminalLine<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Replace the row with `text` followed by the cursor glyph
    pub fn draw(&mut self, text: &str, cursor: char) -> io::Result<()> {
        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(text),
            Print(cursor)
        )?;
        self.out.flush()
    }

    /// Leave the row as drawn and move to the next one
    pub fn finish(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\r\n"))?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Main application state
pub struct App<W: Write> {
    config: Config,
    theme: Theme,
    line: TerminalLine<W>,
}

impl<W: Write> App<W> {
    pub fn new(config: Config, theme: Theme, out: W) -> Self {
        Self {
            config,
            theme,
            line: TerminalLine::new(out),
        }
    }

    /// Play the heading reveal, then the typewriter line.
    /// Returns the number of full phrase cycles played.
    pub fn run(&mut self) -> io::Result<u32> {
        log::info!("Running with {} theme", self.theme);
        self.line.draw(&format!("[{} theme]", self.theme), ' ')?;
        self.line.finish()?;

        self.run_reveal()?;
        let cycles = self.run_typewriter()?;
        self.line.finish()?;
        Ok(cycles)
    }

    fn run_reveal(&mut self) -> io::Result<()> {
        let text = SharedText::new();
        let mut reveal = TextReveal::new(
            text.clone(),
            self.config.reveal.text.as_str(),
            self.config.reveal.to_reveal_config(),
        );

        while let Some(delay) = reveal.time_until_next_step() {
            thread::sleep(delay);
            reveal.advance(delay);
            self.line.draw(&text.text(), ' ')?;
        }
        self.line.finish()
    }

    fn run_typewriter(&mut self) -> io::Result<u32> {
        let text = SharedText::new();
        let config = self.config.typewriter.to_typewriter_config();
        let cursor = config.cursor;
        let mut tw = Typewriter::new(
            Some(text.clone()),
            self.config.typewriter.phrases.iter().cloned(),
            config,
        );
        if tw.is_inert() {
            log::warn!("No phrases configured, skipping typewriter");
            return Ok(0);
        }

        let mut blink = CursorBlink::new();
        let mut completed = 0;
        self.stop_after_last_cycle(&mut tw, completed);
        tw.start();
        self.line.draw(&text.text(), blink.glyph(cursor))?;

        while let Some(next_step) = tw.time_until_next_step() {
            let delay = blink
                .time_until_next_step()
                .map_or(next_step, |d| d.min(next_step));
            thread::sleep(delay);

            tw.advance(delay);
            blink.advance(delay);

            if tw.cycles_completed() != completed {
                completed = tw.cycles_completed();
                log::debug!("Completed cycle {}", completed);
                self.stop_after_last_cycle(&mut tw, completed);
            }

            self.line.draw(&text.text(), blink.glyph(cursor))?;
        }

        Ok(completed)
    }

    /// Ask for a graceful stop once the final configured cycle is under way
    fn stop_after_last_cycle(&self, tw: &mut Typewriter<SharedText>, completed: u32) {
        let cycles = self.config.cycles;
        if cycles > 0 && completed + 1 >= cycles {
            tw.stop();
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.line.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RevealSection, TypewriterSection};

    fn fast_config(phrases: &[&str], cycles: u32) -> Config {
        Config {
            cycles,
            typewriter: TypewriterSection {
                phrases: phrases.iter().map(|p| p.to_string()).collect(),
                type_speed_ms: 1,
                jitter_ms: 0,
                delete_speed_ms: 1,
                pause_time_ms: 2,
                ..Default::default()
            },
            reveal: RevealSection {
                text: "Hello".into(),
                speed_ms: 1,
                delay_ms: 0,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_run_plays_configured_cycles() {
        let mut app = App::new(fast_config(&["ab", "cd"], 2), Theme::Light, Vec::new());
        assert_eq!(app.run().unwrap(), 2);

        let out = String::from_utf8_lossy(&app.into_output()).into_owned();
        assert!(out.contains("[light theme]"));
        assert!(out.contains("Hello"));
        assert!(out.contains("ab|"));
        assert!(out.contains("cd|"));
    }

    #[test]
    fn test_run_single_cycle_single_phrase() {
        let mut app = App::new(fast_config(&["x"], 1), Theme::Dark, Vec::new());
        assert_eq!(app.run().unwrap(), 1);
    }

    #[test]
    fn test_run_counts_cycles_ending_on_one_char_phrase() {
        let mut app = App::new(fast_config(&["ab", "c"], 2), Theme::Dark, Vec::new());
        assert_eq!(app.run().unwrap(), 2);

        let out = String::from_utf8_lossy(&app.into_output()).into_owned();
        assert!(out.contains("c|"));
    }

    #[test]
    fn test_run_without_phrases() {
        let mut app = App::new(fast_config(&[], 1), Theme::Dark, Vec::new());
        assert_eq!(app.run().unwrap(), 0);
    }

    #[test]
    fn test_terminal_line_draws_text_and_cursor() {
        let mut line = TerminalLine::new(Vec::new());
        line.draw("Hi", '|').unwrap();
        let out = String::from_utf8(line.into_inner()).unwrap();
        assert!(out.ends_with("Hi|"));
    }
}
