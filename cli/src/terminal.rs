//! Terminal [`LeadsView`]: tables go to stdout, everything else to stderr.
//!
//! There is no dialog on a terminal; its state is tracked so commands can
//! report it, and the form is pre-filled from command-line arguments.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::{Cell, RefCell};
use std::io::Write;

use leadboard::{DialogState, LeadForm, LeadsView, TableBody};

use crate::api::endpoint_url;

pub struct TerminalView<O: Write, E: Write> {
    out: RefCell<O>,
    err: RefCell<E>,
    base_url: String,
    form: RefCell<LeadForm>,
    dialog: Cell<DialogState>,
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E, base_url: impl Into<String>) -> Self {
        Self {
            out: RefCell::new(out),
            err: RefCell::new(err),
            base_url: base_url.into(),
            form: RefCell::new(LeadForm::default()),
            dialog: Cell::new(DialogState::Hidden),
        }
    }

    /// Stand in for the user typing into the dialog.
    pub fn fill_form(&self, form: LeadForm) {
        *self.form.borrow_mut() = form;
    }

    #[must_use]
    pub fn dialog(&self) -> DialogState {
        self.dialog.get()
    }

    fn write_out(&self, text: &str) {
        if let Err(err) = writeln!(self.out.borrow_mut(), "{text}") {
            tracing::warn!(error = %err, "stdout write failed");
        }
    }

    fn write_err(&self, text: &str) {
        if let Err(err) = writeln!(self.err.borrow_mut(), "{text}") {
            tracing::warn!(error = %err, "stderr write failed");
        }
    }
}

impl<O: Write, E: Write> LeadsView for TerminalView<O, E> {
    fn render_table(&self, body: &TableBody) {
        match body {
            TableBody::Loading => tracing::debug!("loading leads"),
            TableBody::Error => self.write_err(&body.to_text()),
            TableBody::Empty | TableBody::Rows(_) => self.write_out(&body.to_text()),
        }
    }

    fn set_dialog(&self, state: DialogState) {
        self.dialog.set(state);
    }

    fn read_form(&self) -> LeadForm {
        self.form.borrow().clone()
    }

    fn clear_text_fields(&self) {
        let mut form = self.form.borrow_mut();
        form.name.clear();
        form.email.clear();
        form.company.clear();
    }

    fn notify(&self, message: &str) {
        self.write_err(message);
    }

    fn redirect(&self, path: &str) {
        self.write_err(&format!(
            "Not signed in. Log in at {} and pass the session cookie with --session.",
            endpoint_url(&self.base_url, path)
        ));
    }
}
