const NO_NETWORK: &str = "нет доступа к сети";
const PHONE_NOT_WORKING: &str = "не работает телефон";
const NO_EMAIL_RECEIVE: &str = "не приходят письма";

const REASON_ERROR_MESSAGE: &str =
    "Причина должна быть одной из: нет доступа к сети, не работает телефон, не приходят письма";

/// Closed set of complaint reasons the form accepts. The submitted value is
/// the canonical display string and is stored back unchanged.
#[derive(Debug)]
pub enum ComplaintReason {
    NoNetwork,
    PhoneNotWorking,
    NoEmailReceive,
}

impl ComplaintReason {
    pub fn parse(reason: &str) -> Result<ComplaintReason, String> {
        match reason {
            NO_NETWORK => Ok(ComplaintReason::NoNetwork),
            PHONE_NOT_WORKING => Ok(ComplaintReason::PhoneNotWorking),
            NO_EMAIL_RECEIVE => Ok(ComplaintReason::NoEmailReceive),
            _ => Err(String::from(REASON_ERROR_MESSAGE)),
        }
    }
}

impl AsRef<str> for ComplaintReason {
    fn as_ref(&self) -> &str {
        match self {
            ComplaintReason::NoNetwork => NO_NETWORK,
            ComplaintReason::PhoneNotWorking => PHONE_NOT_WORKING,
            ComplaintReason::NoEmailReceive => NO_EMAIL_RECEIVE,
        }
    }
}

impl serde::Serialize for ComplaintReason {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}
