use crate::models::booking::Booking;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Accepted,
    Rejected { reason: String },
}

pub fn rejection_reason(candidate: &Booking) -> String {
    format!(
        "You have already an appointment for {} on {}",
        candidate.treatment, candidate.appointment_date
    )
}

/// A client may hold one booking per treatment per day; the slot does not
/// matter.
pub fn can_accept(existing: &[Booking], candidate: &Booking) -> Admission {
    if existing.iter().any(|b| b.collides_with(candidate)) {
        Admission::Rejected {
            reason: rejection_reason(candidate),
        }
    } else {
        Admission::Accepted
    }
}
