//! Scenario Tests for the Add-on Entry Points
//!
//! Run the full render / feedback / retry flows against a stub scoring service.

#[cfg(test)]
mod scenario_tests {
    use std::cell::{Cell, RefCell};

    use serde_json::{json, Value};

    use crate::api::commands::{ActionRequest, ActionResponse, AddonService, EMPTY_MESSAGE, NO_MESSAGE_OPEN};
    use crate::logic::card::{error_message, format_confidence, CardDescription, ACTION_FEEDBACK, ACTION_RENDER};
    use crate::logic::config::AddonConfig;
    use crate::logic::feedback::{FEEDBACK_FAILED, FEEDBACK_SAVED};
    use crate::logic::scoring::{
        FeedbackRequest, HealthResponse, MailMessage, ScanRequest, ScoringApi, ScoringError,
    };
    use crate::logic::verdict::RawClassification;

    /// In-memory scoring service
    struct StubApi {
        classify_reply: Result<Value, ScoringError>,
        feedback_reply: Result<(), ScoringError>,
        classify_calls: Cell<usize>,
        feedback_sent: RefCell<Vec<FeedbackRequest>>,
    }

    impl StubApi {
        fn replying(value: Value) -> Self {
            Self {
                classify_reply: Ok(value),
                feedback_reply: Ok(()),
                classify_calls: Cell::new(0),
                feedback_sent: RefCell::new(Vec::new()),
            }
        }

        fn failing(error: ScoringError) -> Self {
            Self {
                classify_reply: Err(error.clone()),
                feedback_reply: Err(error),
                ..Self::replying(Value::Null)
            }
        }
    }

    impl ScoringApi for StubApi {
        fn classify(&self, _request: &ScanRequest) -> Result<RawClassification, ScoringError> {
            self.classify_calls.set(self.classify_calls.get() + 1);
            let value = self.classify_reply.clone()?;
            serde_json::from_value(value).map_err(|e| ScoringError::MalformedResponse(e.to_string()))
        }

        fn send_feedback(&self, request: &FeedbackRequest) -> Result<(), ScoringError> {
            self.feedback_sent.borrow_mut().push(request.clone());
            self.feedback_reply.clone()
        }

        fn health(&self) -> Result<HealthResponse, ScoringError> {
            Ok(HealthResponse { status: "ok".to_string() })
        }
    }

    fn service(api: StubApi) -> AddonService<StubApi> {
        AddonService::new(AddonConfig::default(), api)
    }

    fn message() -> MailMessage {
        MailMessage {
            subject: "Security Alert".to_string(),
            body: "Your account is compromised verify now".to_string(),
            sender: "security@paypa1.com".to_string(),
        }
    }

    fn feedback_click(id: &str, is_phishing: &str) -> ActionRequest {
        let mut request = ActionRequest::new(ACTION_FEEDBACK);
        request.parameters.insert("id".to_string(), id.to_string());
        request.parameters.insert("is_phishing".to_string(), is_phishing.to_string());
        request
    }

    fn card_text(card: &CardDescription) -> String {
        serde_json::to_string(card).unwrap()
    }

    #[test]
    fn test_scenario_phishing() {
        let svc = service(StubApi::replying(json!({
            "label": "Phishing", "final_score": 0.93, "id": "7"
        })));
        let card = svc.on_message_open(&message());

        assert_eq!(card.header.title, "Phishing Detected");
        assert!(card_text(&card).contains(&format_confidence(93.0)));
        assert!(card.buttons().any(|b| b.text == "Confirm Threat"));
        assert_eq!(card.footer.map(|f| f.text).as_deref(), Some("Rescan"));
    }

    #[test]
    fn test_scenario_unknown_label() {
        let svc = service(StubApi::replying(json!({ "label": "Safe-ish-typo", "final_score": 0.1 })));
        let card = svc.on_message_open(&message());

        assert_eq!(card.header.title, "Verified Safe");
        assert!(card.footer.is_none());
        assert!(card.buttons().any(|b| b.text == "Mark Safe"));
    }

    #[test]
    fn test_scenario_feedback_saved() {
        let svc = service(StubApi::replying(Value::Null));
        let response = svc.on_action(&feedback_click("7", "true"), None);

        match response {
            ActionResponse::Notice(notice) => assert_eq!(notice.text, FEEDBACK_SAVED),
            other => panic!("expected notice, got {other:?}"),
        }
        assert_eq!(
            svc.api().feedback_sent.borrow().as_slice(),
            &[FeedbackRequest { id: "7".to_string(), is_phishing: true }]
        );
        assert_eq!(FEEDBACK_SAVED, "Feedback saved.");
    }

    #[test]
    fn test_scenario_feedback_transport_failure() {
        let svc = service(StubApi::failing(ScoringError::Transport("connection reset".to_string())));
        let response = svc.on_action(&feedback_click("7", "true"), Some(&message()));

        match response {
            ActionResponse::Notice(notice) => assert_eq!(notice.text, "Connection Error"),
            other => panic!("expected notice, got {other:?}"),
        }
        assert_eq!(FEEDBACK_FAILED, "Connection Error");
        assert_eq!(svc.api().feedback_sent.borrow().len(), 1);
        // Feedback never triggers a re-scan
        assert_eq!(svc.api().classify_calls.get(), 0);
    }

    #[test]
    fn test_scenario_server_error() {
        let svc = service(StubApi::failing(ScoringError::Server(503)));
        let card = svc.on_message_open(&message());
        assert_eq!(error_message(&card), Some("Server Error (503)"));
    }

    #[test]
    fn test_malformed_response_becomes_error_card() {
        let svc = service(StubApi::replying(json!({ "label": ["not", "a", "string"], "id": {} })));
        // Wrong types are coerced, not rejected
        let card = svc.on_message_open(&message());
        assert_eq!(card.header.title, "Verified Safe");

        let svc = service(StubApi::replying(json!("just a string")));
        let card = svc.on_message_open(&message());
        assert_eq!(error_message(&card), Some("Invalid response from server"));
    }

    #[test]
    fn test_round_trip_buttons_reference_item() {
        let svc = service(StubApi::replying(json!({ "label": "Suspicious", "final_score": 0.5, "id": 42 })));
        let card = svc.on_message_open(&message());

        for button in card.buttons() {
            let request = ActionRequest {
                action_name: button.action.function_name.clone(),
                parameters: button.action.parameters.clone(),
            };
            let response = svc.on_action(&request, Some(&message()));
            assert!(matches!(response, ActionResponse::Notice(_)));
        }

        let sent = svc.api().feedback_sent.borrow();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], FeedbackRequest { id: "42".to_string(), is_phishing: false });
        assert_eq!(sent[1], FeedbackRequest { id: "42".to_string(), is_phishing: true });
    }

    #[test]
    fn test_retry_is_a_fresh_scan() {
        let svc = service(StubApi::failing(ScoringError::Server(500)));
        let card = svc.on_message_open(&message());
        let retry = card.buttons().next().expect("retry button");
        assert_eq!(retry.action.function_name, ACTION_RENDER);

        let response = svc.on_action(&ActionRequest::new(&retry.action.function_name), Some(&message()));
        match response {
            ActionResponse::Card(card) => assert_eq!(error_message(&card), Some("Server Error (500)")),
            other => panic!("expected card, got {other:?}"),
        }
        assert_eq!(svc.api().classify_calls.get(), 2);
    }

    #[test]
    fn test_rescan_without_message() {
        let svc = service(StubApi::replying(json!({ "label": "Phishing" })));
        match svc.on_action(&ActionRequest::new(ACTION_RENDER), None) {
            ActionResponse::Card(card) => assert_eq!(error_message(&card), Some(NO_MESSAGE_OPEN)),
            other => panic!("expected card, got {other:?}"),
        }
        assert_eq!(svc.api().classify_calls.get(), 0);
    }

    #[test]
    fn test_unknown_action() {
        let svc = service(StubApi::replying(json!({})));
        match svc.on_action(&ActionRequest::new("launch_rockets"), Some(&message())) {
            ActionResponse::Card(card) => {
                assert_eq!(error_message(&card), Some("Unsupported action: launch_rockets"));
            }
            other => panic!("expected card, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_message_skips_network() {
        let svc = service(StubApi::replying(json!({ "label": "Phishing" })));
        let card = svc.on_message_open(&MailMessage::default());
        assert_eq!(error_message(&card), Some(EMPTY_MESSAGE));
        assert_eq!(svc.api().classify_calls.get(), 0);
    }

    #[test]
    fn test_action_request_wire_shape() {
        let request: ActionRequest = serde_json::from_value(json!({
            "actionName": "submit_feedback",
            "parameters": { "id": "42", "is_phishing": "false" }
        }))
        .unwrap();
        assert_eq!(request, feedback_click("42", "false"));

        let response = ActionResponse::Notice(crate::logic::card::Notice::new(FEEDBACK_SAVED));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "type": "notice", "data": { "text": "Feedback saved." } })
        );
    }

    #[test]
    fn test_health() {
        let svc = service(StubApi::replying(json!({})));
        assert!(svc.check_health().unwrap().is_ok());
    }
}
