//! Terminal-backed decision provider for the user's seat.
//!
//! Implements the engine's [`DecisionSource`] over a prompt/answer loop.
//! All amount constraints are resolved here by re-prompting; the betting
//! machine only ever sees valid decisions. A quit request folds the
//! current hand and makes every later prompt fold immediately, so the
//! surrounding command can stop the game between rounds.

use std::cell::{Cell, RefCell};
use std::io::{BufRead, Write};
use std::rc::Rc;

use fivedraw_engine::decision::{DecisionSource, TurnView};
use fivedraw_engine::player::Decision;
use fivedraw_engine::rules::validate_raise;

use crate::formatters::{format_category, format_hand};
use crate::io_utils::read_stdin_line;
use crate::validation::{parse_decision, parse_discards, ParseResult};

pub struct HumanSource<'a, 'b> {
    input: &'a RefCell<&'b mut dyn BufRead>,
    output: &'a RefCell<&'b mut dyn Write>,
    quit: Rc<Cell<bool>>,
}

impl<'a, 'b> HumanSource<'a, 'b> {
    pub fn new(
        input: &'a RefCell<&'b mut dyn BufRead>,
        output: &'a RefCell<&'b mut dyn Write>,
        quit: Rc<Cell<bool>>,
    ) -> Self {
        Self {
            input,
            output,
            quit,
        }
    }

    fn show_standing(&self, view: &TurnView<'_>) {
        let mut out = self.output.borrow_mut();
        let _ = writeln!(out);
        let _ = writeln!(out, "Your hand: {}", format_hand(view.hand));
        if let Some(rank) = view.rank {
            let _ = writeln!(
                out,
                "{}: {}",
                format_category(rank.category),
                format_hand(&rank.cards)
            );
        }
        let _ = writeln!(
            out,
            "Cash: {}   Your bet: {}   Current bid: {}",
            view.money, view.bet, view.current_bid
        );
    }

    fn prompt(&self, text: &str) -> Option<String> {
        {
            let mut out = self.output.borrow_mut();
            let _ = write!(out, "{}", text);
            let _ = out.flush();
        }
        let mut input = self.input.borrow_mut();
        read_stdin_line(&mut **input)
    }

    fn say(&self, text: &str) {
        let mut out = self.output.borrow_mut();
        let _ = writeln!(out, "{}", text);
    }
}

impl DecisionSource for HumanSource<'_, '_> {
    fn decide(&mut self, view: &TurnView<'_>) -> Decision {
        if self.quit.get() {
            return Decision::Fold;
        }
        self.show_standing(view);
        let options = if view.current_bid == 0 {
            "check, bet <amount>, fold, quit"
        } else {
            "call, raise <amount>, fold, quit"
        };
        self.say(&format!("Options: {}", options));
        loop {
            let Some(line) = self.prompt("> ") else {
                self.quit.set(true);
                return Decision::Fold;
            };
            match parse_decision(&line) {
                ParseResult::Action(Decision::Raise(amount)) => {
                    match validate_raise(view.money + view.bet, view.current_bid, amount) {
                        Ok(amount) => return Decision::Raise(amount),
                        Err(e) => self.say(&e.to_string()),
                    }
                }
                ParseResult::Action(decision) => return decision,
                ParseResult::Quit => {
                    self.quit.set(true);
                    return Decision::Fold;
                }
                ParseResult::Invalid(msg) => self.say(&msg),
            }
        }
    }

    fn choose_discards(&mut self, view: &TurnView<'_>) -> Vec<usize> {
        if self.quit.get() {
            return Vec::new();
        }
        self.show_standing(view);
        self.say("Which cards would you like to replace?");
        self.say("0 for none, or up to four card numbers (1-5), space separated.");
        loop {
            let Some(line) = self.prompt("> ") else {
                self.quit.set(true);
                return Vec::new();
            };
            match parse_discards(&line, view.hand.len()) {
                Ok(picks) => return picks,
                Err(msg) => self.say(&msg),
            }
        }
    }
}
