mod validation;

use serde::{Deserialize, Serialize};
pub use validation::{PartyFieldError, PartyRequestValidation};

/// Label attached to every submission so the intake inbox can tell this
/// funnel apart from other forms on the site.
pub const SOURCE_TAG: &str = "Wings Arena Birthday Parties Form";

/// What the party should primarily be geared towards. Rendered as a row
/// of checkboxes but backed by a single exclusive choice.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, Eq, PartialEq, Hash)]
pub enum PartyFocus {
    #[default]
    #[serde(rename = "")]
    Unselected,
    Hockey,
    #[serde(rename = "Just Skating")]
    JustSkating,
    Both,
}

impl PartyFocus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unselected => "",
            Self::Hockey => "Hockey",
            Self::JustSkating => "Just Skating",
            Self::Both => "Both",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Hockey" => Self::Hockey,
            "Just Skating" => Self::JustSkating,
            "Both" => Self::Both,
            _ => Self::Unselected,
        }
    }

    /// Exclusive-choice toggle: picking the current choice clears it,
    /// picking any other replaces it.
    #[must_use]
    pub const fn toggle(self, clicked: Self) -> Self {
        match (self, clicked) {
            (Self::Hockey, Self::Hockey)
            | (Self::JustSkating, Self::JustSkating)
            | (Self::Both, Self::Both) => Self::Unselected,
            _ => clicked,
        }
    }
}

/// The fields of a party request, in form order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PartyField {
    FirstName,
    LastName,
    Email,
    Phone,
    PreferredDate,
    EstPeople,
    EstSkateRentals,
    PartyFocus,
}

impl PartyField {
    pub const ALL: [Self; 8] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Phone,
        Self::PreferredDate,
        Self::EstPeople,
        Self::EstSkateRentals,
        Self::PartyFocus,
    ];

    /// Wire and DOM name of the field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::PreferredDate => "preferredDate",
            Self::EstPeople => "estPeople",
            Self::EstSkateRentals => "estSkateRentals",
            Self::PartyFocus => "partyFocus",
        }
    }
}

/// Everything the visitor enters into the booking form. Count fields
/// stay strings until submission, matching what the inputs hold.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Eq, PartialEq)]
pub struct PartyRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "preferredDate")]
    pub preferred_date: String,
    #[serde(rename = "estPeople")]
    pub est_people: String,
    #[serde(rename = "estSkateRentals")]
    pub est_skate_rentals: String,
    #[serde(rename = "partyFocus")]
    pub party_focus: PartyFocus,
}

impl PartyRequest {
    pub fn set(&mut self, field: PartyField, value: String) {
        match field {
            PartyField::FirstName => self.first_name = value,
            PartyField::LastName => self.last_name = value,
            PartyField::Email => self.email = value,
            PartyField::Phone => self.phone = value,
            PartyField::PreferredDate => self.preferred_date = value,
            PartyField::EstPeople => self.est_people = value,
            PartyField::EstSkateRentals => self.est_skate_rentals = value,
            PartyField::PartyFocus => self.party_focus = PartyFocus::from_label(&value),
        }
    }

    #[must_use]
    pub fn subject(&self) -> String {
        format!(
            "Birthday Party Request: {} {} ({})",
            self.first_name, self.last_name, self.preferred_date
        )
    }
}

/// Wire body sent to the form-intake endpoint: the request itself plus
/// the routing fields the sink understands.
#[derive(Serialize, Debug)]
pub struct PartySubmission {
    #[serde(flatten)]
    pub request: PartyRequest,
    #[serde(rename = "_subject")]
    pub subject: String,
    #[serde(rename = "_replyto")]
    pub reply_to: String,
    pub source: &'static str,
}

impl PartySubmission {
    #[must_use]
    pub fn new(request: PartyRequest) -> Self {
        let subject = request.subject();
        let reply_to = request.email.clone();
        Self {
            request,
            subject,
            reply_to,
            source: SOURCE_TAG,
        }
    }
}

/// Best-effort shape of a rejection body from the form sink. Every field
/// is optional; anything unreadable collapses to the default.
#[derive(Deserialize, Debug, Default)]
pub struct SinkFailure {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<SinkFailureDetail>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct SinkFailureDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl SinkFailure {
    const FALLBACK: &'static str = "Request failed. Please try again.";

    /// Banner message: `error`, else the first entry of `errors`, else a
    /// generic fallback. Empty strings count as absent.
    #[must_use]
    pub fn message(&self) -> String {
        self.error
            .clone()
            .filter(|msg| !msg.is_empty())
            .or_else(|| {
                self.errors
                    .as_ref()
                    .and_then(|errors| errors.first())
                    .and_then(|detail| detail.message.clone())
                    .filter(|msg| !msg.is_empty())
            })
            .unwrap_or_else(|| Self::FALLBACK.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_exclusive_pick() {
        assert_eq!(
            PartyFocus::Hockey.toggle(PartyFocus::Hockey),
            PartyFocus::Unselected
        );
        assert_eq!(PartyFocus::Hockey.toggle(PartyFocus::Both), PartyFocus::Both);
        assert_eq!(
            PartyFocus::Unselected.toggle(PartyFocus::JustSkating),
            PartyFocus::JustSkating
        );
    }

    #[test]
    fn focus_labels_round_trip() {
        for focus in [
            PartyFocus::Unselected,
            PartyFocus::Hockey,
            PartyFocus::JustSkating,
            PartyFocus::Both,
        ] {
            assert_eq!(PartyFocus::from_label(focus.label()), focus);
        }
        assert_eq!(
            PartyFocus::from_label("Figure Skating"),
            PartyFocus::Unselected
        );
    }

    #[test]
    fn set_updates_the_named_field() {
        let mut request = PartyRequest::default();
        request.set(PartyField::Email, "j@example.com".to_owned());
        request.set(PartyField::PartyFocus, "Both".to_owned());
        assert_eq!(request.email, "j@example.com");
        assert_eq!(request.party_focus, PartyFocus::Both);
    }

    #[test]
    fn submission_carries_routing_fields() {
        let request = PartyRequest {
            first_name: "Sam".to_owned(),
            last_name: "Lee".to_owned(),
            email: "sam@lee.example".to_owned(),
            preferred_date: "2026-03-01".to_owned(),
            ..Default::default()
        };

        let body = serde_json::to_value(PartySubmission::new(request)).unwrap();

        assert_eq!(
            body["_subject"],
            "Birthday Party Request: Sam Lee (2026-03-01)"
        );
        assert_eq!(body["_replyto"], "sam@lee.example");
        assert_eq!(body["source"], SOURCE_TAG);
        assert_eq!(body["firstName"], "Sam");
        assert_eq!(body["partyFocus"], "");
    }

    #[test]
    fn sink_failure_prefers_the_error_field() {
        let failure: SinkFailure = serde_json::from_str(r#"{"error":"Form disabled"}"#).unwrap();
        assert_eq!(failure.message(), "Form disabled");
    }

    #[test]
    fn sink_failure_falls_back_to_first_detail() {
        let failure: SinkFailure =
            serde_json::from_str(r#"{"errors":[{"message":"Bad date"},{"message":"Bad email"}]}"#)
                .unwrap();
        assert_eq!(failure.message(), "Bad date");
    }

    #[test]
    fn sink_failure_generic_fallback() {
        assert_eq!(
            SinkFailure::default().message(),
            "Request failed. Please try again."
        );

        let failure: SinkFailure = serde_json::from_str(r#"{"error":"","errors":[{}]}"#).unwrap();
        assert_eq!(failure.message(), "Request failed. Please try again.");
    }
}
