use httpmock::prelude::*;
use nutrition_client::app::forms::{FILL_FIELDS_MESSAGE, RETRY_MESSAGE};
use nutrition_client::{
    ApiGateway, BmiInput, CalculatorForms, CaloriesInput, ClientConfig, ClientError,
    ContactMessage, Presenter,
};
use std::sync::{Arc, Mutex};

/// Records every presenter call so tests can assert on the exact
/// sequence of UI effects.
#[derive(Clone, Default)]
struct RecordingPresenter {
    events: Arc<Mutex<Vec<String>>>,
}

impl RecordingPresenter {
    fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl Presenter for RecordingPresenter {
    fn set_busy(&self, busy: bool) {
        self.push(format!("busy:{}", busy));
    }

    fn render_result(&self, text: &str) {
        self.push(format!("result:{}", text));
    }

    fn render_error(&self, text: &str) {
        self.push(format!("error:{}", text));
    }

    fn clear_inputs(&self) {
        self.push("clear".to_string());
    }
}

fn forms_for(server: &MockServer) -> (CalculatorForms<RecordingPresenter>, RecordingPresenter) {
    let config = ClientConfig {
        tracking_base_url: server.base_url(),
        food_base_url: server.base_url(),
        tools_base_url: server.base_url(),
    };
    let gateway = ApiGateway::new(config).unwrap();
    let presenter = RecordingPresenter::default();
    (CalculatorForms::new(gateway, presenter.clone()), presenter)
}

#[tokio::test]
async fn test_bmi_success_renders_value_and_category() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/bmi")
            .json_body(serde_json::json!({"weight": 70.0, "height": 1.78}));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"bmi": 22.1}));
    });

    let (forms, presenter) = forms_for(&server);
    forms
        .submit_bmi(&BmiInput {
            weight: Some(70.0),
            height: Some(1.78),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(
        presenter.events(),
        vec![
            "busy:true".to_string(),
            "busy:false".to_string(),
            "result:Your BMI is 22.1 (Normal Weight)".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_bmi_missing_fields_block_the_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/bmi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"bmi": 0.0}));
    });

    let (forms, presenter) = forms_for(&server);
    let err = forms
        .submit_bmi(&BmiInput {
            weight: None,
            height: Some(1.78),
        })
        .await
        .unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(err, ClientError::Validation { .. }));
    assert_eq!(
        presenter.events(),
        vec![format!("error:{}", FILL_FIELDS_MESSAGE)]
    );
}

#[tokio::test]
async fn test_bmi_zero_values_block_the_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/bmi");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"bmi": 0.0}));
    });

    let (forms, _presenter) = forms_for(&server);
    for input in [
        BmiInput {
            weight: Some(0.0),
            height: Some(1.78),
        },
        BmiInput {
            weight: Some(70.0),
            height: Some(0.0),
        },
    ] {
        let err = forms.submit_bmi(&input).await.unwrap_err();
        assert!(matches!(err, ClientError::Validation { .. }));
    }

    mock.assert_hits(0);
}

#[tokio::test]
async fn test_bmi_backend_failure_clears_busy_and_suggests_retry() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/bmi");
        then.status(500);
    });

    let (forms, presenter) = forms_for(&server);
    let err = forms
        .submit_bmi(&BmiInput {
            weight: Some(70.0),
            height: Some(1.78),
        })
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(err.status(), Some(500));
    assert_eq!(
        presenter.events(),
        vec![
            "busy:true".to_string(),
            "busy:false".to_string(),
            format!("error:{}", RETRY_MESSAGE),
        ]
    );
}

#[tokio::test]
async fn test_calories_success_renders_rounded_value() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/calories").json_body(
            serde_json::json!({"weight": 70.0, "height": 1.78, "age": 30, "activity": "moderate"}),
        );
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"calories": 2450.7}));
    });

    let (forms, presenter) = forms_for(&server);
    forms
        .submit_calories(&CaloriesInput {
            weight: Some(70.0),
            height: Some(1.78),
            age: Some(30),
            activity: Some("moderate".to_string()),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(
        presenter.events().last().unwrap(),
        "result:Estimated daily calories: 2451"
    );
}

#[tokio::test]
async fn test_calories_missing_age_blocks_the_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/calories");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"calories": 0.0}));
    });

    let (forms, presenter) = forms_for(&server);
    let err = forms
        .submit_calories(&CaloriesInput {
            weight: Some(70.0),
            height: Some(1.78),
            age: None,
            activity: Some("moderate".to_string()),
        })
        .await
        .unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(err, ClientError::Validation { .. }));
    assert_eq!(
        presenter.events(),
        vec![format!("error:{}", FILL_FIELDS_MESSAGE)]
    );
}

#[tokio::test]
async fn test_contact_success_clears_inputs() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact").json_body(
            serde_json::json!({"name": "Alice", "email": "alice@example.com", "message": "Hi"}),
        );
        then.status(204);
    });

    let (forms, presenter) = forms_for(&server);
    forms
        .submit_contact(&ContactMessage {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "Hi".to_string(),
        })
        .await
        .unwrap();

    mock.assert();
    assert_eq!(
        presenter.events(),
        vec![
            "busy:true".to_string(),
            "busy:false".to_string(),
            "clear".to_string(),
            "result:Thanks! Your message has been sent.".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_contact_failure_still_resets_transient_state() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(503);
    });

    let (forms, presenter) = forms_for(&server);
    let err = forms
        .submit_contact(&ContactMessage {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            message: "Hi".to_string(),
        })
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(err.status(), Some(503));
    assert_eq!(
        presenter.events(),
        vec![
            "busy:true".to_string(),
            "busy:false".to_string(),
            "clear".to_string(),
            format!("error:{}", RETRY_MESSAGE),
        ]
    );
}

#[tokio::test]
async fn test_contact_empty_fields_block_the_network_call() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/api/contact");
        then.status(204);
    });

    let (forms, _presenter) = forms_for(&server);
    let err = forms
        .submit_contact(&ContactMessage {
            name: "Alice".to_string(),
            email: "   ".to_string(),
            message: "Hi".to_string(),
        })
        .await
        .unwrap_err();

    mock.assert_hits(0);
    assert!(matches!(err, ClientError::Validation { .. }));
}
