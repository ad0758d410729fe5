use std::ops::RangeInclusive;

// Submissions come from the Russian-language form, so the accepted alphabet
// is Cyrillic. Ё sits outside the contiguous А..Я block and needs its own case.
const UPPERCASE_LETTERS: RangeInclusive<char> = 'А'..='Я';
const LOWERCASE_LETTERS: RangeInclusive<char> = 'а'..='я';
const UPPERCASE_YO: char = 'Ё';
const LOWERCASE_YO: char = 'ё';

const NAME_ERROR_MESSAGE: &str =
    "Должно содержать только кириллицу и начинаться с заглавной буквы";

#[derive(Debug, serde::Serialize)]
pub struct SubscriberName(String);

impl SubscriberName {
    pub fn parse(name: String) -> Result<SubscriberName, String> {
        let mut chars = name.chars();
        let starts_with_uppercase = chars.next().map_or(false, is_uppercase_letter);
        let rest = chars.as_str();
        let rest_is_lowercase = !rest.is_empty() && rest.chars().all(is_lowercase_letter);

        if !starts_with_uppercase || !rest_is_lowercase {
            return Err(String::from(NAME_ERROR_MESSAGE));
        }

        Ok(Self(name))
    }
}

fn is_uppercase_letter(char: char) -> bool {
    UPPERCASE_LETTERS.contains(&char) || char == UPPERCASE_YO
}

fn is_lowercase_letter(char: char) -> bool {
    LOWERCASE_LETTERS.contains(&char) || char == LOWERCASE_YO
}

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
