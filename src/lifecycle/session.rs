use crate::config::VendorConfig;
use crate::console::{Console, InputSource};
use crate::lifecycle::SessionError;
use crate::model::Order;
use crate::ordering::{build_order, review_order};
use crate::render::{menu_table, render_receipt};
use chrono::{Local, NaiveDateTime};
use std::io::Write;
use tracing::{debug, info, instrument};

const MAIN_MENU_PROMPT: &str = "Please choose an option: ";
const MAIN_MENU_CHOICES: [&str; 3] = ["1", "2", "3"];
const CONFIRM_EXIT_PROMPT: &str = "Are you sure you want to exit? (yes/no): ";
const CONFIRM_EXIT_CHOICES: [&str; 2] = ["yes", "no"];

pub const FAREWELL: &str = "THANK YOU FOR VISITING US!";

/// Where the customer is in the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the numbered options and waiting for a choice.
    MainMenu,
    ViewingMenu,
    /// Building, reviewing and pricing one order.
    Ordering,
    ConfirmingExit,
    /// Final. [`Session::step`] does nothing from here.
    Terminated,
}

/// The main controller for one customer visit.
///
/// `Session` owns the [`Console`] and borrows the vendor configuration; the
/// catalog is handed down to every component as `&Menu` and never mutated.
///
/// # Example
///
/// ```ignore
/// let config = VendorConfig::default();
/// let console = Console::new(LineReader::stdin(), std::io::stdout());
/// Session::new(&config, console).run()?;
/// ```
pub struct Session<'a, I, W> {
    config: &'a VendorConfig,
    console: Console<I, W>,
    state: SessionState,
    clock: fn() -> NaiveDateTime,
}

impl<'a, I: InputSource, W: Write> Session<'a, I, W> {
    /// Creates a session in [`SessionState::MainMenu`], stamping receipts with local time.
    pub fn new(config: &'a VendorConfig, console: Console<I, W>) -> Self {
        Self {
            config,
            console,
            state: SessionState::MainMenu,
            clock: || Local::now().naive_local(),
        }
    }

    /// Replaces the receipt clock, e.g. with a fixed time in tests.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn console(&self) -> &Console<I, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<I, W> {
        self.console
    }

    /// Runs the state machine until the customer confirms they want to leave.
    #[instrument(skip_all, fields(vendor = %self.config.name))]
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("Session started");
        while self.state != SessionState::Terminated {
            self.step()?;
        }
        info!("Session finished");
        Ok(())
    }

    /// Performs the work of the current state and moves to the next one.
    ///
    /// Returns the new state.
    pub fn step(&mut self) -> Result<SessionState, SessionError> {
        let next = match self.state {
            SessionState::MainMenu => self.main_menu()?,
            SessionState::ViewingMenu => {
                self.console.say(menu_table(&self.config.menu))?;
                SessionState::MainMenu
            }
            SessionState::Ordering => {
                self.place_order()?;
                SessionState::MainMenu
            }
            SessionState::ConfirmingExit => self.confirm_exit()?,
            SessionState::Terminated => SessionState::Terminated,
        };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, "State transition");
        }
        self.state = next;
        Ok(next)
    }

    /// Builds, reviews and prices one order, returning it once the receipt is out.
    pub fn place_order(&mut self) -> Result<Order, SessionError> {
        let menu = &self.config.menu;
        let order = build_order(&mut self.console, menu)?;
        let order = review_order(&mut self.console, order, menu)?;
        render_receipt(
            &mut self.console,
            &order,
            menu,
            &self.config.receipt_title(),
            (self.clock)(),
        )?;
        Ok(order)
    }

    fn main_menu(&mut self) -> Result<SessionState, SessionError> {
        self.console.say("")?;
        self.console.say(self.config.welcome_banner())?;
        self.console.say("1. View Menu")?;
        self.console.say("2. Place Your Order")?;
        self.console.say("3. Exit")?;

        let choice = self.console.prompt_choice(MAIN_MENU_PROMPT, &MAIN_MENU_CHOICES)?;
        Ok(match choice.as_str() {
            "1" => SessionState::ViewingMenu,
            "2" => SessionState::Ordering,
            "3" => SessionState::ConfirmingExit,
            _ => SessionState::MainMenu,
        })
    }

    fn confirm_exit(&mut self) -> Result<SessionState, SessionError> {
        let answer = self
            .console
            .prompt_choice(CONFIRM_EXIT_PROMPT, &CONFIRM_EXIT_CHOICES)?;
        if answer == "yes" {
            self.console.say(FAREWELL)?;
            Ok(SessionState::Terminated)
        } else {
            Ok(SessionState::MainMenu)
        }
    }
}
