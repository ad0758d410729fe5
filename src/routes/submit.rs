use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};
use serde::Serialize;

use crate::domain::new_subscriber::{SubscriberForm, SubscriberRecord, ValidationError};
use crate::store::{StoreError, SubscriberStore};

const SUCCESS_MESSAGE: &str = "Данные успешно сохранены";

#[derive(Serialize)]
struct SubmitResponse {
    message: &'static str,
    data: SubscriberRecord,
}

#[tracing::instrument(
    name = "Submitting a new subscriber",
    skip(body, store),
    fields(
        subscriber_email = %body.email,
        subscriber_surname = %body.surname
    )
)]
pub async fn handle_submit_subscriber(
    body: web::Json<SubscriberForm>,
    store: web::Data<SubscriberStore>,
) -> Result<HttpResponse, SubmitSubscriberError> {
    let record: SubscriberRecord = body
        .into_inner()
        .try_into()
        .map_err(SubmitSubscriberError::Validation)?;

    let record = store
        .append(record)
        .map_err(SubmitSubscriberError::Storage)?;

    Ok(HttpResponse::Ok().json(SubmitResponse {
        message: SUCCESS_MESSAGE,
        data: record,
    }))
}

#[derive(thiserror::Error)]
pub enum SubmitSubscriberError {
    #[error("The submitted form contains invalid fields.")]
    Validation(#[source] ValidationError),
    #[error("Failed to persist the new subscriber.")]
    Storage(#[from] StoreError),
}

impl std::fmt::Debug for SubmitSubscriberError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl ResponseError for SubmitSubscriberError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitSubscriberError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SubmitSubscriberError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            // The 422 body names every failing field with its message.
            SubmitSubscriberError::Validation(error) => {
                HttpResponse::build(self.status_code()).json(error)
            }
            SubmitSubscriberError::Storage(_) => HttpResponse::new(self.status_code()),
        }
    }
}
