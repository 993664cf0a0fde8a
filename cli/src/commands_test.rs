use std::cell::RefCell;
use std::collections::VecDeque;

use leadboard::{ControllerConfig, DialogState, HttpReply, LoadError, NewLead, SubmitError, TransportError};

use super::*;

// =========================================================================
// ScriptedApi
// =========================================================================

#[derive(Default)]
struct ScriptedApi {
    replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
    posted: RefCell<Vec<NewLead>>,
}

impl ScriptedApi {
    fn with(replies: Vec<Result<HttpReply, TransportError>>) -> Self {
        Self { replies: RefCell::new(replies.into()), posted: RefCell::default() }
    }

    fn next(&self) -> Result<HttpReply, TransportError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Request("script exhausted".into())))
    }
}

#[async_trait::async_trait(?Send)]
impl LeadsApi for ScriptedApi {
    async fn list_leads(&self) -> Result<HttpReply, TransportError> {
        self.next()
    }

    async fn create_lead(&self, lead: &NewLead) -> Result<HttpReply, TransportError> {
        self.posted.borrow_mut().push(lead.clone());
        self.next()
    }
}

type TestController = TerminalController<ScriptedApi, Vec<u8>, Vec<u8>>;

fn controller(replies: Vec<Result<HttpReply, TransportError>>) -> TestController {
    LeadListController::new(
        ScriptedApi::with(replies),
        TerminalView::new(Vec::new(), Vec::new(), "http://127.0.0.1:5000"),
        ControllerConfig::default(),
    )
}

fn form(name: &str) -> LeadForm {
    LeadForm {
        name: name.into(),
        email: "ada@example.com".into(),
        company: "Engines".into(),
        status: "New".into(),
    }
}

// =========================================================================
// list
// =========================================================================

#[tokio::test]
async fn list_succeeds_on_rows() {
    let ctl = controller(vec![Ok(HttpReply::new(200, r#"[{"id": 1, "name": "Ada"}]"#))]);
    assert!(run_list(&ctl).await.is_ok());
}

#[tokio::test]
async fn list_succeeds_on_empty_collection() {
    let ctl = controller(vec![Ok(HttpReply::new(200, "[]"))]);
    assert!(run_list(&ctl).await.is_ok());
}

#[tokio::test]
async fn list_unauthorized_is_auth_error() {
    let ctl = controller(vec![Ok(HttpReply::new(401, r#"{"error": "authentication required"}"#))]);
    assert!(matches!(run_list(&ctl).await, Err(CliError::AuthRequired)));
}

#[tokio::test]
async fn list_server_error_is_load_error() {
    let ctl = controller(vec![Ok(HttpReply::new(503, ""))]);
    assert!(matches!(
        run_list(&ctl).await,
        Err(CliError::Load(LoadError::Status { status: 503 }))
    ));
}

// =========================================================================
// add
// =========================================================================

#[tokio::test]
async fn add_posts_form_and_reloads() {
    let ctl = controller(vec![
        Ok(HttpReply::new(201, r#"{"id": 5, "name": "Ada"}"#)),
        Ok(HttpReply::new(200, r#"[{"id": 5, "name": "Ada"}]"#)),
    ]);

    assert!(run_add(&ctl, form("Ada")).await.is_ok());
    assert_eq!(ctl.api().posted.borrow().len(), 1);
    assert_eq!(ctl.view().dialog(), DialogState::Hidden);
}

#[tokio::test]
async fn add_without_name_never_posts() {
    let ctl = controller(Vec::new());

    let result = run_add(&ctl, form("  ")).await;

    assert!(matches!(result, Err(CliError::Submit(SubmitError::NameRequired))));
    assert!(ctl.api().posted.borrow().is_empty());
    assert_eq!(ctl.view().dialog(), DialogState::Visible);
}

#[tokio::test]
async fn add_rejected_surfaces_server_message() {
    let ctl = controller(vec![Ok(HttpReply::new(400, r#"{"error": "name required"}"#))]);

    let err = run_add(&ctl, form("Ada")).await.unwrap_err();

    assert_eq!(err.to_string(), "lead not created: name required");
}

#[tokio::test]
async fn add_created_but_reload_unauthorized_is_auth_error() {
    let ctl = controller(vec![Ok(HttpReply::new(201, "{}")), Ok(HttpReply::new(401, ""))]);
    assert!(matches!(run_add(&ctl, form("Ada")).await, Err(CliError::AuthRequired)));
}

#[test]
fn posted_body_matches_server_contract() {
    let lead = form(" Ada ").to_new_lead().unwrap();
    assert_eq!(
        serde_json::to_value(&lead).unwrap(),
        serde_json::json!({"name": "Ada", "email": "ada@example.com", "company": "Engines", "status": "New"})
    );
}
