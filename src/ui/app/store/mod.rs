//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{Action, ContactAction, FormAction, StorageAction};
pub use command::{Command, ContactQuery, SaveOp};

use super::ContactBookApp;

impl ContactBookApp {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
    }
}
