use std::collections::HashSet;

use shared::{PartyField, PartyFocus, PartyRequest, PartyRequestValidation};
use yew::{prelude::*, virtual_dom::AttrValue};

use crate::{
    components::Field,
    environment::{endpoint_configured, FORM_ENDPOINT},
    fetch::{self, FetchError},
};

/// Top-level banner state; exactly one of these is active at a time.
enum Status {
    Idle,
    Error(String),
    Success(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct BookingFormProps {
    /// Show the exclusive party-focus picker.
    #[prop_or(true)]
    pub party_focus: bool,
    /// Place the submit button inside the field grid instead of the
    /// actions row below it.
    #[prop_or(true)]
    pub submit_in_grid: bool,
}

pub enum Msg {
    Input(PartyField, String),
    Blur(PartyField),
    ToggleFocus(PartyFocus),
    Submit,
    Submitted(Result<(), FetchError>),
}

pub struct BookingForm {
    request: PartyRequest,
    touched: HashSet<PartyField>,
    status: Status,
    submitting: bool,
}

impl Component for BookingForm {
    type Message = Msg;
    type Properties = BookingFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            request: PartyRequest::default(),
            touched: HashSet::new(),
            status: Status::Idle,
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(field, value) => {
                self.request.set(field, value);
                true
            }

            Msg::Blur(field) => {
                self.touched.insert(field);
                true
            }

            Msg::ToggleFocus(choice) => {
                self.request.party_focus = self.request.party_focus.toggle(choice);
                true
            }

            Msg::Submit => self.submit(ctx),

            Msg::Submitted(result) => {
                // cleared on every exit path, success or not
                self.submitting = false;

                match result {
                    Ok(()) => {
                        self.status = Status::Success(
                            "Thanks! Your request was sent. We'll be in touch shortly.".to_owned(),
                        );
                        self.request = PartyRequest::default();
                        self.touched.clear();
                    }
                    Err(FetchError::Rejected(msg)) => {
                        self.status = Status::Error(msg);
                    }
                    Err(e) => {
                        log::error!("party request failed: {e}");
                        self.status =
                            Status::Error("Something went wrong. Please try again.".to_owned());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        let mut validation = PartyRequestValidation::default();
        validation.check(&self.request);

        html! {
            <form class="form" onsubmit={ctx.link().callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                <div class={classes!("grid", props.submit_in_grid.then_some("grid-with-button"))}>
                    { self.view_fields(ctx, &validation) }
                    { props.party_focus.then(|| self.view_focus(ctx)) }
                    if props.submit_in_grid {
                        <div class="submit-slot" aria-label="Submit request">
                            { self.view_submit() }
                        </div>
                    }
                </div>

                <div class={classes!(
                    "actions",
                    props.submit_in_grid.then_some("actions-no-button")
                )}>
                    <div class="actions-left">
                        { self.view_status() }
                    </div>
                    if !props.submit_in_grid {
                        <div class="actions-right">
                            { self.view_submit() }
                        </div>
                    }
                </div>
            </form>
        }
    }
}

impl BookingForm {
    fn submit(&mut self, ctx: &Context<Self>) -> bool {
        // a submit attempt surfaces every pending error at once
        self.touched.extend(PartyField::ALL);

        let mut validation = PartyRequestValidation::default();
        validation.check(&self.request);

        if validation.has_any() {
            self.status = Status::Error("Please fix the highlighted fields.".to_owned());
            return true;
        }

        if !endpoint_configured(FORM_ENDPOINT) {
            self.status = Status::Error(
                "Form submit is not configured yet. Paste your form endpoint into FORM_ENDPOINT."
                    .to_owned(),
            );
            return true;
        }

        self.submitting = true;
        self.status = Status::Idle;

        let request = self.request.clone();
        ctx.link().send_future(async move {
            Msg::Submitted(fetch::submit_party_request(FORM_ENDPOINT, request).await)
        });

        true
    }

    fn view_fields(&self, ctx: &Context<Self>, validation: &PartyRequestValidation) -> Html {
        let oninput = ctx
            .link()
            .callback(|(field, value)| Msg::Input(field, value));
        let onblur = ctx.link().callback(Msg::Blur);

        let field_error = |field: PartyField| -> Option<AttrValue> {
            self.touched
                .contains(&field)
                .then(|| validation.message(field))
                .flatten()
                .map(AttrValue::Static)
        };

        html! {
            <>
                <Field
                    label="First Name"
                    field={PartyField::FirstName}
                    value={self.request.first_name.clone()}
                    error={field_error(PartyField::FirstName)}
                    autocomplete="given-name"
                    oninput={oninput.clone()}
                    onblur={onblur.clone()} />

                <Field
                    label="Last Name"
                    field={PartyField::LastName}
                    value={self.request.last_name.clone()}
                    error={field_error(PartyField::LastName)}
                    autocomplete="family-name"
                    oninput={oninput.clone()}
                    onblur={onblur.clone()} />

                <Field
                    label="Email"
                    field={PartyField::Email}
                    kind="email"
                    value={self.request.email.clone()}
                    error={field_error(PartyField::Email)}
                    autocomplete="email"
                    oninput={oninput.clone()}
                    onblur={onblur.clone()} />

                <Field
                    label="Phone Number"
                    field={PartyField::Phone}
                    kind="tel"
                    value={self.request.phone.clone()}
                    error={field_error(PartyField::Phone)}
                    autocomplete="tel"
                    placeholder="(###) ###-####"
                    oninput={oninput.clone()}
                    onblur={onblur.clone()} />

                <Field
                    label="Preferred Party Date"
                    field={PartyField::PreferredDate}
                    kind="date"
                    value={self.request.preferred_date.clone()}
                    error={field_error(PartyField::PreferredDate)}
                    oninput={oninput.clone()}
                    onblur={onblur.clone()} />

                <Field
                    label="Estimated Number of People"
                    field={PartyField::EstPeople}
                    kind="number"
                    value={self.request.est_people.clone()}
                    error={field_error(PartyField::EstPeople)}
                    min="0"
                    placeholder="e.g. 15"
                    oninput={oninput.clone()}
                    onblur={onblur.clone()} />

                <Field
                    label="Estimated Skate Rentals"
                    field={PartyField::EstSkateRentals}
                    kind="number"
                    value={self.request.est_skate_rentals.clone()}
                    error={field_error(PartyField::EstSkateRentals)}
                    min="0"
                    placeholder="e.g. 10"
                    oninput={oninput}
                    onblur={onblur} />
            </>
        }
    }

    fn view_focus(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="party-focus" role="group" aria-label="Party focus selection">
                <p class="party-focus-question">
                    {"What would you like your party to be primarily geared towards?"}
                </p>

                <div class="party-focus-options">
                    { for [PartyFocus::Hockey, PartyFocus::JustSkating, PartyFocus::Both]
                        .map(|choice| self.view_focus_option(ctx, choice)) }
                </div>

                <p class="party-focus-hint">
                    {"(This helps us recommend the best setup for your party)"}
                </p>
            </div>
        }
    }

    fn view_focus_option(&self, ctx: &Context<Self>, choice: PartyFocus) -> Html {
        html! {
            <label class="check-item">
                <input
                    type="checkbox"
                    checked={self.request.party_focus == choice}
                    onchange={ctx.link().callback(move |_: Event| Msg::ToggleFocus(choice))} />
                <span>{choice.label()}</span>
            </label>
        }
    }

    fn view_submit(&self) -> Html {
        html! {
            <button class="button-primary button-submit" type="submit" disabled={self.submitting}>
                { if self.submitting { "Sending..." } else { "Submit Request" } }
            </button>
        }
    }

    fn view_status(&self) -> Html {
        match &self.status {
            Status::Idle => html! {},
            Status::Error(msg) => html! {
                <p class="status status-error">{msg.clone()}</p>
            },
            Status::Success(msg) => html! {
                <p class="status status-success">{msg.clone()}</p>
            },
        }
    }
}
