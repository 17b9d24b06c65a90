use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::{BookingForm, Footer, Gallery};

pub const CONTACT_EMAIL: &str = "jwanderlingh@wingsarena.com";

const FORM_ANCHOR: &str = "start-planning";

/// Which rendition of the booking form the page shows. `Full` carries
/// the party-focus picker and keeps the submit button inside the field
/// grid; `Basic` drops the picker and moves the button into a
/// two-column actions row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormVariant {
    Full,
    Basic,
}

impl FormVariant {
    const fn party_focus(self) -> bool {
        matches!(self, Self::Full)
    }

    const fn submit_in_grid(self) -> bool {
        matches!(self, Self::Full)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Properties)]
pub struct PartyProps {
    #[prop_or(FormVariant::Full)]
    pub variant: FormVariant,
}

pub enum Msg {
    ScrollToForm,
}

pub struct Party;
impl Component for Party {
    type Message = Msg;
    type Properties = PartyProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ScrollToForm => {
                scroll_to_form();
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                { Self::view_hero(ctx) }

                <main class="main">
                    { Self::view_expect() }
                    { Self::view_reviews() }
                    { Self::view_form(ctx) }
                </main>

                <Footer />
            </div>
        }
    }
}

impl Party {
    fn view_hero(ctx: &Context<Self>) -> Html {
        html! {
            <header class="hero" role="banner">
                <div class="hero-media" aria-hidden="true">
                    <img class="hero-img" src="/assets/flow-room.jpg" alt="" />
                    <div class="hero-overlay" />
                </div>

                <div class="hero-inner">
                    <img class="logo" src="/assets/logo.png" alt="Wings Arena" />
                    <h1 class="hero-title">{"Birthday Parties"}</h1>

                    <p class="hero-body">
                        {"Make your next birthday one to remember - celebrate at Wings Arena \
                          with a party that's equal parts fun and easy. Our birthday party \
                          packages give you dedicated space for food, cake, and presents, plus \
                          plenty of ice time for the kids to skate, play, and burn off energy. \
                          Whether it's their first time on skates or they're already flying \
                          around the rink, our team helps keep everything running smoothly so \
                          you can enjoy the day without the stress. Pick a date, bring the \
                          candles, and let Wings Arena handle the rest - a birthday on the ice \
                          is always a win."}
                    </p>

                    <div class="hero-actions">
                        <button
                            class="button-primary"
                            type="button"
                            onclick={ctx.link().callback(|_| Msg::ScrollToForm)}>
                            {"Start Planning"}
                        </button>
                    </div>
                </div>
            </header>
        }
    }

    fn view_expect() -> Html {
        html! {
            <section class="content-wrap" aria-label="Birthday party details">
                <div class="section-header">
                    <h2 class="section-title">{"What to Expect"}</h2>
                    <p class="section-sub">
                        {"A smooth, organized party day with plenty of ice time and a dedicated \
                          space to celebrate."}
                    </p>
                </div>

                <div class="info-grid">
                    <div class="info-card">
                        <h3 class="info-title">{"Dedicated Party Space"}</h3>
                        <p class="info-text">
                            {"Settle in with your group for food, cake, and gifts - then head \
                              back out for more skating."}
                        </p>
                    </div>

                    <div class="info-card">
                        <h3 class="info-title">{"Skates + Support"}</h3>
                        <p class="info-text">
                            {"Estimate rentals in the form below - our team will help coordinate \
                              details as we confirm."}
                        </p>
                    </div>

                    <div class="info-card">
                        <h3 class="info-title">{"Easy Planning"}</h3>
                        <p class="info-text">
                            {"Submit your preferred date and party size. We'll follow up to \
                              confirm availability and next steps."}
                        </p>
                    </div>
                </div>
            </section>
        }
    }

    fn view_reviews() -> Html {
        html! {
            <section class="reviews" aria-label="Reviews">
                <div class="reviews-media" aria-hidden="true">
                    <img class="reviews-img" src="/assets/reviews-bg.jpg" alt="" />
                    <div class="reviews-overlay" />
                </div>

                <div class="reviews-inner">
                    <blockquote class="review-quote">
                        {"\"Great communication from start to finish, awesome energy from the \
                          staff, and a super memorable birthday for our kid - everything felt \
                          organized, easy, and genuinely fun for the whole group.\""}
                    </blockquote>
                    <div class="review-by">{"-Nicolas | Greenwich, CT"}</div>
                </div>
            </section>
        }
    }

    fn view_form(ctx: &Context<Self>) -> Html {
        let variant = ctx.props().variant;

        html! {
            <section class="form-section" id={FORM_ANCHOR} aria-label="Start planning form">
                <div class="form-header">
                    <h2 class="form-title">{"Start Planning"}</h2>

                    <p class="form-note">
                        {"Our Program Director, Joe will reach out to you with pricing options \
                          and availability."}
                    </p>

                    <p class="form-hint">{"We typically respond within 24-48 hours."}</p>
                </div>

                <div class="form-card">
                    <BookingForm
                        party_focus={variant.party_focus()}
                        submit_in_grid={variant.submit_in_grid()} />
                </div>

                <p class="questions-below">
                    {"Questions? Reach out to our Program Director, Joe at "}
                    <a class="email-link" href={format!("mailto:{CONTACT_EMAIL}")}>
                        {CONTACT_EMAIL}
                    </a>
                </p>

                <Gallery />
            </section>
        }
    }
}

fn scroll_to_form() {
    if let Some(el) = gloo_utils::document().get_element_by_id(FORM_ANCHOR) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
