use serde::Deserialize;

use crate::domain::birth_date::BirthDate;
use crate::domain::complaint_reason::ComplaintReason;
use crate::domain::phone_number::PhoneNumber;
use crate::domain::problem_detected_at::ProblemDetectedAt;
use crate::domain::subscriber_email::SubscriberEmail;
use crate::domain::subscriber_name::SubscriberName;

/// Request body, exactly as submitted. The complaint fields are only present
/// in the complaint variant of the form.
#[derive(Deserialize, Debug)]
pub struct SubscriberForm {
    pub surname: String,
    pub name: String,
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub reason: Option<String>,
    pub problem_detected_at: Option<String>,
}

/// A fully validated submission. Field order here is also the order fields
/// are reported in validation errors and written to the backing file.
#[derive(Debug, serde::Serialize)]
pub struct SubscriberRecord {
    pub surname: SubscriberName,
    pub name: SubscriberName,
    pub birth_date: BirthDate,
    pub phone: PhoneNumber,
    pub email: SubscriberEmail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ComplaintReason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_detected_at: Option<ProblemDetectedAt>,
}

#[derive(Debug, serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every failing field with its message, not just the first one found.
#[derive(Debug, serde::Serialize)]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self
            .errors
            .iter()
            .map(|error| error.field)
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "Invalid subscriber fields: {}", fields)
    }
}

impl std::error::Error for ValidationError {}

impl TryFrom<SubscriberForm> for SubscriberRecord {
    type Error = ValidationError;

    fn try_from(form: SubscriberForm) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        // Every rule runs regardless of the others' outcome, so the error
        // report names all failing fields at once.
        let surname = checked(&mut errors, "surname", SubscriberName::parse(form.surname));
        let name = checked(&mut errors, "name", SubscriberName::parse(form.name));
        let birth_date = checked(&mut errors, "birth_date", BirthDate::parse(&form.birth_date));
        let phone = checked(&mut errors, "phone", PhoneNumber::parse(form.phone));
        let email = checked(&mut errors, "email", SubscriberEmail::parse(form.email));
        let reason = checked(
            &mut errors,
            "reason",
            form.reason.as_deref().map(ComplaintReason::parse).transpose(),
        );
        let problem_detected_at = checked(
            &mut errors,
            "problem_detected_at",
            form.problem_detected_at
                .as_deref()
                .map(ProblemDetectedAt::parse)
                .transpose(),
        );

        match (
            surname,
            name,
            birth_date,
            phone,
            email,
            reason,
            problem_detected_at,
        ) {
            (
                Some(surname),
                Some(name),
                Some(birth_date),
                Some(phone),
                Some(email),
                Some(reason),
                Some(problem_detected_at),
            ) => Ok(SubscriberRecord {
                surname,
                name,
                birth_date,
                phone,
                email,
                reason,
                problem_detected_at,
            }),
            _ => Err(ValidationError { errors }),
        }
    }
}

fn checked<T>(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    result: Result<T, String>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.push(FieldError { field, message });
            None
        }
    }
}
