use crate::{PartyField, PartyRequest};

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PartyFieldError {
    Required,
    InvalidEmail,
    Negative,
}

impl PartyFieldError {
    /// Inline message shown under the field.
    #[must_use]
    pub const fn message(self, field: PartyField) -> &'static str {
        match (field, self) {
            (PartyField::FirstName, Self::Required) => "First name is required.",
            (PartyField::LastName, Self::Required) => "Last name is required.",
            (PartyField::Email, Self::Required) => "Email is required.",
            (PartyField::Email, Self::InvalidEmail) => "Enter a valid email.",
            (PartyField::Phone, Self::Required) => "Phone number is required.",
            (PartyField::PreferredDate, Self::Required) => "Please choose a preferred date.",
            (PartyField::EstPeople | PartyField::EstSkateRentals, Self::Negative) => {
                "Must be 0 or more."
            }
            _ => "Invalid value.",
        }
    }
}

#[derive(Default, Debug)]
pub struct PartyRequestValidation {
    pub first_name: Option<PartyFieldError>,
    pub last_name: Option<PartyFieldError>,
    pub email: Option<PartyFieldError>,
    pub phone: Option<PartyFieldError>,
    pub preferred_date: Option<PartyFieldError>,
    pub est_people: Option<PartyFieldError>,
    pub est_skate_rentals: Option<PartyFieldError>,
}

impl PartyRequestValidation {
    /// Recompute every field from scratch.
    pub fn check(&mut self, request: &PartyRequest) {
        self.first_name = Self::check_required(&request.first_name);
        self.last_name = Self::check_required(&request.last_name);
        self.email = Self::check_email(&request.email);
        self.phone = Self::check_required(&request.phone);
        self.preferred_date = Self::check_date(&request.preferred_date);
        self.est_people = Self::check_count(&request.est_people);
        self.est_skate_rentals = Self::check_count(&request.est_skate_rentals);
    }

    #[must_use]
    pub const fn has_any(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.preferred_date.is_some()
            || self.est_people.is_some()
            || self.est_skate_rentals.is_some()
    }

    #[must_use]
    pub const fn error(&self, field: PartyField) -> Option<PartyFieldError> {
        match field {
            PartyField::FirstName => self.first_name,
            PartyField::LastName => self.last_name,
            PartyField::Email => self.email,
            PartyField::Phone => self.phone,
            PartyField::PreferredDate => self.preferred_date,
            PartyField::EstPeople => self.est_people,
            PartyField::EstSkateRentals => self.est_skate_rentals,
            PartyField::PartyFocus => None,
        }
    }

    /// Message for the given field, if it currently fails.
    #[must_use]
    pub fn message(&self, field: PartyField) -> Option<&'static str> {
        self.error(field).map(|error| error.message(field))
    }

    fn check_required(value: &str) -> Option<PartyFieldError> {
        value.trim().is_empty().then_some(PartyFieldError::Required)
    }

    fn check_email(value: &str) -> Option<PartyFieldError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            Some(PartyFieldError::Required)
        } else if is_valid_email(trimmed) {
            None
        } else {
            Some(PartyFieldError::InvalidEmail)
        }
    }

    // date inputs produce either an ISO date or the empty string
    fn check_date(value: &str) -> Option<PartyFieldError> {
        value.is_empty().then_some(PartyFieldError::Required)
    }

    // Counts are optional: empty and non-numeric strings never block
    // submission, only an explicit negative does.
    fn check_count(value: &str) -> Option<PartyFieldError> {
        if value.is_empty() {
            return None;
        }

        value
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(|count| (count < 0.0).then_some(PartyFieldError::Negative))
    }
}

// Loose `local@domain.tld` shape check. The sink re-validates on its own
// side, so this only needs to catch obvious typos, not enforce the RFC.
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty() && !tld.is_empty() && !value.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PartyFocus;

    fn filled() -> PartyRequest {
        PartyRequest {
            first_name: "Jamie".to_owned(),
            last_name: "Ortiz".to_owned(),
            email: "jamie@example.com".to_owned(),
            phone: "(203) 555-0188".to_owned(),
            preferred_date: "2026-09-12".to_owned(),
            est_people: "15".to_owned(),
            est_skate_rentals: "10".to_owned(),
            party_focus: PartyFocus::Unselected,
        }
    }

    fn checked(request: &PartyRequest) -> PartyRequestValidation {
        let mut validation = PartyRequestValidation::default();
        validation.check(request);
        validation
    }

    #[test]
    fn filled_request_passes() {
        assert!(!checked(&filled()).has_any());
    }

    #[test]
    fn counts_may_be_left_empty() {
        let mut request = filled();
        request.est_people = String::new();
        request.est_skate_rentals = String::new();

        assert!(!checked(&request).has_any());
    }

    #[test]
    fn blank_first_name_flags_only_that_field() {
        let mut request = filled();
        request.first_name = "   ".to_owned();

        let validation = checked(&request);

        assert_eq!(
            validation.error(PartyField::FirstName),
            Some(PartyFieldError::Required)
        );
        assert_eq!(
            validation.message(PartyField::FirstName),
            Some("First name is required.")
        );
        for field in PartyField::ALL {
            if field != PartyField::FirstName {
                assert_eq!(validation.error(field), None);
            }
        }
    }

    #[test]
    fn blank_and_malformed_email_messages_differ() {
        let mut request = filled();

        request.email = String::new();
        assert_eq!(
            checked(&request).message(PartyField::Email),
            Some("Email is required.")
        );

        request.email = "not-an-email".to_owned();
        assert_eq!(
            checked(&request).message(PartyField::Email),
            Some("Enter a valid email.")
        );
    }

    #[test]
    fn email_shape_is_a_loose_heuristic() {
        let mut request = filled();

        for good in ["a@b.c", "jamie.ortiz@rink.example.com", "  padded@example.com  "] {
            request.email = good.to_owned();
            assert_eq!(checked(&request).error(PartyField::Email), None, "{good}");
        }

        for bad in ["plain", "a@b", "a b@c.d", "@example.com", "a@.com", "a@b.", "a@@b.c"] {
            request.email = bad.to_owned();
            assert_eq!(
                checked(&request).error(PartyField::Email),
                Some(PartyFieldError::InvalidEmail),
                "{bad}"
            );
        }
    }

    #[test]
    fn negative_count_is_flagged() {
        let mut request = filled();
        request.est_people = "-1".to_owned();

        let validation = checked(&request);

        assert_eq!(
            validation.error(PartyField::EstPeople),
            Some(PartyFieldError::Negative)
        );
        assert_eq!(
            validation.message(PartyField::EstPeople),
            Some("Must be 0 or more.")
        );

        request.est_people = "0".to_owned();
        assert_eq!(checked(&request).error(PartyField::EstPeople), None);
    }

    #[test]
    fn unparsable_count_does_not_block() {
        let mut request = filled();
        request.est_skate_rentals = "a dozen".to_owned();

        assert_eq!(checked(&request).error(PartyField::EstSkateRentals), None);
    }

    #[test]
    fn party_focus_never_errors() {
        let mut request = filled();

        for focus in [PartyFocus::Unselected, PartyFocus::Hockey, PartyFocus::Both] {
            request.party_focus = focus;
            let validation = checked(&request);
            assert_eq!(validation.error(PartyField::PartyFocus), None);
            assert!(!validation.has_any());
        }
    }
}
