use crate::helpers::TestApp;

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "surname": "Петров",
        "name": "Иван",
        "birth_date": "1990-05-01",
        "phone": "+79161234567",
        "email": "ivan@example.com"
    })
}

#[tokio::test]
async fn submit_returns_200_and_echoes_the_record_when_body_is_valid() {
    let test_app = TestApp::spawn_app().await;
    let body = valid_body();

    let response = test_app.post_submit(&body).await;

    assert_eq!(200, response.status().as_u16());

    let response_body: serde_json::Value = response
        .json()
        .await
        .expect("Response body is not valid JSON.");
    assert_eq!(response_body["message"], "Данные успешно сохранены");
    assert_eq!(response_body["data"], body);
}

#[tokio::test]
async fn submit_accepts_the_complaint_variant_of_the_form() {
    let test_app = TestApp::spawn_app().await;
    let body = serde_json::json!({
        "surname": "Сидорова",
        "name": "Анна",
        "birth_date": "1985-11-23",
        "phone": "79219876543",
        "email": "anna@example.com",
        "reason": "не работает телефон",
        "problem_detected_at": "2023-01-15 09:30"
    });

    let response = test_app.post_submit(&body).await;

    assert_eq!(200, response.status().as_u16());

    let response_body: serde_json::Value = response
        .json()
        .await
        .expect("Response body is not valid JSON.");
    assert_eq!(response_body["data"], body);
}

#[tokio::test]
async fn submit_creates_the_backing_file_on_first_submission() {
    let test_app = TestApp::spawn_app().await;
    assert!(!test_app.storage_file_path.exists());

    test_app.post_submit(&valid_body()).await;

    let stored = test_app.read_stored_subscribers();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0], valid_body());
}

#[tokio::test]
async fn submit_persists_records_in_submission_order() {
    let test_app = TestApp::spawn_app().await;
    let first = valid_body();
    let second = serde_json::json!({
        "surname": "Сидорова",
        "name": "Анна",
        "birth_date": "1985-11-23",
        "phone": "79219876543",
        "email": "anna@example.com"
    });

    test_app.post_submit(&first).await;
    test_app.post_submit(&second).await;

    let stored = test_app.read_stored_subscribers();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0], first);
    assert_eq!(stored[1], second);
}

#[tokio::test]
async fn submit_returns_422_with_the_field_message_when_phone_is_invalid() {
    let test_app = TestApp::spawn_app().await;
    let mut body = valid_body();
    body["phone"] = serde_json::json!("123");

    let response = test_app.post_submit(&body).await;

    assert_eq!(422, response.status().as_u16());

    let response_body: serde_json::Value = response
        .json()
        .await
        .expect("Response body is not valid JSON.");
    let errors = response_body["errors"]
        .as_array()
        .expect("Error body does not carry an errors list.");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["field"], "phone");
    assert_eq!(
        errors[0]["message"],
        "Номер телефона должен содержать только цифры и начинаться с + или без него"
    );
}

#[tokio::test]
async fn submit_reports_every_failing_field_at_once() {
    let test_app = TestApp::spawn_app().await;
    let mut body = valid_body();
    body["surname"] = serde_json::json!("петров");
    body["phone"] = serde_json::json!("123");
    body["email"] = serde_json::json!("ivan");

    let response = test_app.post_submit(&body).await;

    assert_eq!(422, response.status().as_u16());

    let response_body: serde_json::Value = response
        .json()
        .await
        .expect("Response body is not valid JSON.");
    let fields: Vec<_> = response_body["errors"]
        .as_array()
        .expect("Error body does not carry an errors list.")
        .iter()
        .map(|error| error["field"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(fields, vec!["surname", "phone", "email"]);
}

#[tokio::test]
async fn submit_checks_phone_length_boundaries() {
    let test_app = TestApp::spawn_app().await;

    // This is a common practice and it is called table-driven tests. In this case, it walks the
    // phone rule boundaries: 10 and 15 digits pass, 9 and 16 fail, the leading + is optional
    let test_cases = vec![
        ("9161234567", 200, "ten digits"),
        ("916123456", 422, "nine digits"),
        ("916123456789012", 200, "fifteen digits"),
        ("9161234567890123", 422, "sixteen digits"),
        ("+9161234567", 200, "ten digits with a leading plus"),
        ("+916123456789012", 200, "fifteen digits with a leading plus"),
    ];

    for (phone, expected_status, description) in test_cases {
        let mut body = valid_body();
        body["phone"] = serde_json::json!(phone);

        let response = test_app.post_submit(&body).await;

        assert_eq!(
            expected_status,
            response.status().as_u16(),
            "The API did not return {} when phone was {}",
            expected_status,
            description
        );
    }
}

#[tokio::test]
async fn submit_checks_the_name_alphabet_rule() {
    let test_app = TestApp::spawn_app().await;

    let test_cases = vec![
        ("Иванов", 200, "capitalized cyrillic surname"),
        ("иванов", 422, "surname without a leading capital"),
        ("Иванов2", 422, "surname with a digit"),
    ];

    for (surname, expected_status, description) in test_cases {
        let mut body = valid_body();
        body["surname"] = serde_json::json!(surname);

        let response = test_app.post_submit(&body).await;

        assert_eq!(
            expected_status,
            response.status().as_u16(),
            "The API did not return {} for a {}",
            expected_status,
            description
        );
    }
}

#[tokio::test]
async fn submit_rejects_a_reason_outside_the_closed_set() {
    let test_app = TestApp::spawn_app().await;
    let mut body = valid_body();
    body["reason"] = serde_json::json!("сломался роутер");

    let response = test_app.post_submit(&body).await;

    assert_eq!(422, response.status().as_u16());

    let response_body: serde_json::Value = response
        .json()
        .await
        .expect("Response body is not valid JSON.");
    assert_eq!(response_body["errors"][0]["field"], "reason");
}

#[tokio::test]
async fn submit_returns_400_when_body_require_field_is_missing() {
    let test_app = TestApp::spawn_app().await;

    // Bodies that do not even deserialize into the form shape are rejected
    // before any field rule runs
    let test_cases = vec![
        (serde_json::json!({}), "missing body parameters"),
        (
            serde_json::json!({"surname": "Петров", "name": "Иван"}),
            "missing contact parameters",
        ),
        (
            serde_json::json!({
                "surname": "Петров",
                "name": "Иван",
                "birth_date": 1990,
                "phone": "+79161234567",
                "email": "ivan@example.com"
            }),
            "birth_date with a wrong JSON type",
        ),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = test_app.post_submit(&invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 status when payload was {}",
            error_message
        );
    }
}

#[tokio::test]
async fn submit_returns_500_when_the_backing_file_is_corrupt() {
    let test_app = TestApp::spawn_app().await;
    std::fs::write(&test_app.storage_file_path, "not a json array")
        .expect("Failed to seed the backing file.");

    let response = test_app.post_submit(&valid_body()).await;

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn submit_does_not_persist_an_invalid_submission() {
    let test_app = TestApp::spawn_app().await;
    let mut body = valid_body();
    body["email"] = serde_json::json!("not-an-email");

    test_app.post_submit(&body).await;

    assert!(!test_app.storage_file_path.exists());
}
