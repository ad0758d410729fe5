pub mod birth_date;
pub mod complaint_reason;
pub mod new_subscriber;
pub mod phone_number;
pub mod problem_detected_at;
pub mod subscriber_email;
pub mod subscriber_name;
