use chrono::NaiveDateTime;

const PROBLEM_DETECTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";
const PROBLEM_DETECTED_AT_ERROR_MESSAGE: &str =
    "Дата и время должны быть в формате YYYY-MM-DD HH:MM";

#[derive(Debug)]
pub struct ProblemDetectedAt(NaiveDateTime);

impl ProblemDetectedAt {
    pub fn parse(problem_detected_at: &str) -> Result<ProblemDetectedAt, String> {
        NaiveDateTime::parse_from_str(problem_detected_at, PROBLEM_DETECTED_AT_FORMAT)
            .map(Self)
            .map_err(|_| String::from(PROBLEM_DETECTED_AT_ERROR_MESSAGE))
    }
}

impl AsRef<NaiveDateTime> for ProblemDetectedAt {
    fn as_ref(&self) -> &NaiveDateTime {
        &self.0
    }
}

// chrono's own serde impl writes ISO-8601 with a T separator; the stored
// value has to keep the submitted "YYYY-MM-DD HH:MM" shape.
impl serde::Serialize for ProblemDetectedAt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0.format(PROBLEM_DETECTED_AT_FORMAT))
    }
}
