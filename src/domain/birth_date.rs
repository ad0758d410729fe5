use chrono::NaiveDate;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";
const BIRTH_DATE_ERROR_MESSAGE: &str = "Дата должна быть в формате YYYY-MM-DD";

// NaiveDate serializes back to YYYY-MM-DD, so the stored value matches the
// submitted one. No range check: any date the pattern parses is accepted.
#[derive(Debug, serde::Serialize)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn parse(birth_date: &str) -> Result<BirthDate, String> {
        NaiveDate::parse_from_str(birth_date, BIRTH_DATE_FORMAT)
            .map(Self)
            .map_err(|_| String::from(BIRTH_DATE_ERROR_MESSAGE))
    }
}

impl AsRef<NaiveDate> for BirthDate {
    fn as_ref(&self) -> &NaiveDate {
        &self.0
    }
}
