mod form_origin;
mod lead_email;
mod lead_submission;

pub use form_origin::FormOrigin;
pub use lead_email::LeadEmail;
pub use lead_submission::{LeadSubmission, SubmissionResult, SubmissionStatus};
