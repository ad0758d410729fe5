use validator::validate_email;

const EMAIL_ERROR_MESSAGE: &str = "Некорректный адрес электронной почты";

#[derive(Debug, serde::Serialize)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    pub fn parse(email: String) -> Result<SubscriberEmail, String> {
        let is_valid_email = validate_email(&email);

        if !is_valid_email {
            return Err(String::from(EMAIL_ERROR_MESSAGE));
        }

        Ok(Self(email))
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
