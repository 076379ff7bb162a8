//! The interactive menu and scenario loop.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use tq_engine::{Advance, Catalog, EngineConfig, QuestError, ScenarioDescriptor, ScenarioSession};

use crate::input::{InputSource, StdinInput};

const PROMPT: &str = "Your choice: ";

pub fn run(root: &Path, scenario: Option<&str>, cache: bool) -> Result<(), String> {
    let config = EngineConfig::default().with_root(root).with_cache(cache);
    let mut console = Console::new(StdinInput::stdin(), io::stdout(), io::stderr());
    console.run(&config, scenario).map_err(|e| e.to_string())
}

/// What the user picked at the main menu.
#[derive(Debug, PartialEq, Eq)]
enum MenuChoice {
    Exit,
    Scenario(usize),
    NotANumber,
    OutOfRange,
}

fn parse_menu_choice(input: &str, count: usize) -> MenuChoice {
    match input.trim().parse::<i64>() {
        Err(_) => MenuChoice::NotANumber,
        Ok(0) => MenuChoice::Exit,
        Ok(n) => match usize::try_from(n) {
            Ok(n) if n <= count => MenuChoice::Scenario(n - 1),
            _ => MenuChoice::OutOfRange,
        },
    }
}

/// How a scenario run ended.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    /// Back to the menu.
    Menu,
    /// Input was exhausted; stop everything.
    InputClosed,
}

/// Menu and scenario loop over an input source and two output streams.
///
/// Nothing here ends the process: bad input and load failures are reported
/// and the user is asked again.
pub struct Console<I, O, E> {
    input: I,
    out: O,
    err: E,
}

impl<I: InputSource, O: Write, E: Write> Console<I, O, E> {
    pub fn new(input: I, out: O, err: E) -> Self {
        Self { input, out, err }
    }

    /// Run the main menu until the user exits or input runs out.
    pub fn run(&mut self, config: &EngineConfig, start: Option<&str>) -> io::Result<()> {
        let catalog = Catalog::discover(&config.scenarios_root);
        if let Some(warning) = catalog.warning() {
            writeln!(self.err, "{}", format!("warning: {warning}").yellow())?;
        }
        if catalog.is_empty() {
            writeln!(self.out, "No scenarios available.")?;
            return Ok(());
        }

        if let Some(name) = start {
            match catalog.find(name) {
                Some(scenario) => {
                    if self.play(scenario.clone(), config)? == Flow::InputClosed {
                        return Ok(());
                    }
                }
                None => writeln!(self.err, "{}", format!("unknown scenario: {name}").yellow())?,
            }
        }

        loop {
            self.print_menu(&catalog)?;
            let Some(line) = self.prompt()? else {
                return Ok(());
            };

            match parse_menu_choice(&line, catalog.len()) {
                MenuChoice::Exit => {
                    writeln!(self.out, "Exiting...")?;
                    return Ok(());
                }
                MenuChoice::Scenario(index) => {
                    let Some(scenario) = catalog.get(index) else {
                        continue;
                    };
                    if self.play(scenario.clone(), config)? == Flow::InputClosed {
                        return Ok(());
                    }
                }
                MenuChoice::NotANumber => {
                    writeln!(self.out, "Invalid choice. Please enter a number.")?;
                }
                MenuChoice::OutOfRange => writeln!(self.out, "Invalid scenario choice.")?,
            }
        }
    }

    /// Play one scenario until `end` or end of input.
    fn play(&mut self, scenario: ScenarioDescriptor, config: &EngineConfig) -> io::Result<Flow> {
        let mut session = match ScenarioSession::start(scenario, config) {
            Ok(session) => session,
            Err(e) => {
                self.report(&e)?;
                return Ok(Flow::Menu);
            }
        };

        loop {
            write!(self.out, "{}", session.content().render())?;
            let Some(line) = self.prompt()? else {
                return Ok(Flow::InputClosed);
            };

            match session.advance(&line) {
                Ok(Advance::Moved) => {}
                Ok(Advance::Ended) => return Ok(Flow::Menu),
                Ok(Advance::Invalid(_)) => writeln!(self.out, "Invalid choice. Try again.")?,
                Err(e) => self.report(&e)?,
            }
        }
    }

    fn print_menu(&mut self, catalog: &Catalog) -> io::Result<()> {
        writeln!(self.out, "Choose a scenario:")?;
        for (i, scenario) in catalog.scenarios().iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, scenario.display_name())?;
        }
        writeln!(self.out, "0. Exit")
    }

    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.out, "{PROMPT}")?;
        self.out.flush()?;
        self.input.read_line()
    }

    fn report(&mut self, error: &QuestError) -> io::Result<()> {
        tracing::debug!("{error:?}");
        writeln!(self.err, "{}", format!("error: {error}").red())
    }
}
