const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

const PHONE_ERROR_MESSAGE: &str =
    "Номер телефона должен содержать только цифры и начинаться с + или без него";

#[derive(Debug, serde::Serialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(phone: String) -> Result<PhoneNumber, String> {
        let digits = phone.strip_prefix('+').unwrap_or(&phone);
        let all_ascii_digits = !digits.is_empty() && digits.chars().all(|char| char.is_ascii_digit());
        let within_bounds = (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len());

        if !all_ascii_digits || !within_bounds {
            return Err(String::from(PHONE_ERROR_MESSAGE));
        }

        Ok(Self(phone))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
