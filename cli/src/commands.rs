//! `list` and `add`: each is one controller operation plus an exit status.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::io::Write;

use leadboard::{LeadForm, LeadListController, LeadsApi, LoadOutcome, SubmitOutcome};

use crate::error::CliError;
use crate::terminal::TerminalView;

pub type TerminalController<A, O, E> = LeadListController<A, TerminalView<O, E>>;

/// Load and print the lead table.
///
/// # Errors
///
/// Returns [`CliError::AuthRequired`] on a 401 and [`CliError::Load`] when the
/// error placeholder was shown.
pub async fn run_list<A, O, E>(controller: &TerminalController<A, O, E>) -> Result<(), CliError>
where
    A: LeadsApi,
    O: Write,
    E: Write,
{
    settle_load(controller.load_leads().await)
}

/// Fill the dialog from arguments, submit it, and print the refreshed table.
///
/// # Errors
///
/// Returns [`CliError::Submit`] when the lead was not created, or the
/// [`run_list`] errors when the follow-up reload fails.
pub async fn run_add<A, O, E>(controller: &TerminalController<A, O, E>, form: LeadForm) -> Result<(), CliError>
where
    A: LeadsApi,
    O: Write,
    E: Write,
{
    controller.open_dialog();
    controller.view().fill_form(form);
    match controller.submit_new_lead().await {
        SubmitOutcome::Created(reload) => settle_load(reload),
        SubmitOutcome::Failed(err) => {
            tracing::debug!(dialog = ?controller.view().dialog(), "submission left dialog open");
            Err(CliError::Submit(err))
        }
    }
}

fn settle_load(outcome: LoadOutcome) -> Result<(), CliError> {
    match outcome {
        LoadOutcome::Loaded(_) | LoadOutcome::Empty => Ok(()),
        LoadOutcome::RedirectedToLogin => Err(CliError::AuthRequired),
        LoadOutcome::Failed(err) => Err(CliError::Load(err)),
    }
}
