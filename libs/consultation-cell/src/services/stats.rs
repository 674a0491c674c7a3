use chrono::NaiveDate;

use shared_utils::dates::{is_after, is_this_month};

use crate::models::{Consultation, ConsultationStats};

/// Follow-ups count only when the next visit is strictly after `today`.
pub fn compute(consultations: &[Consultation], today: NaiveDate) -> ConsultationStats {
    ConsultationStats {
        total: consultations.len(),
        with_analyses: consultations.iter().filter(|c| !c.analyses.is_empty()).count(),
        this_month: consultations
            .iter()
            .filter(|c| c.registered_at.as_deref().map_or(false, |d| is_this_month(d, today)))
            .count(),
        upcoming_follow_ups: consultations
            .iter()
            .filter(|c| c.next_visit.as_deref().map_or(false, |d| is_after(d, today)))
            .count(),
    }
}
