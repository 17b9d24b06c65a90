#![deny(
    warnings,
    unused_imports,
    unused_must_use,
    unused_variables,
    unused_mut,
    dead_code,
    clippy::expect_used
)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::dbg_macro,
    clippy::unwrap_used,
    clippy::panic,
    clippy::needless_update,
    clippy::match_like_matches_macro,
    clippy::from_over_into,
    clippy::useless_conversion,
    clippy::float_cmp_const,
    clippy::lossy_float_literal,
    clippy::string_to_string,
    clippy::unneeded_field_pattern,
    clippy::verbose_file_reads
)]
#![allow(
    clippy::use_self,
    clippy::module_name_repetitions,
    clippy::let_unit_value
)]
mod components;
pub mod environment;
mod fetch;
mod pages;
mod routes;

use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{FormVariant, Party};

pub struct AppRoot;
impl Component for AppRoot {
    type Message = ();
    type Properties = ();

    fn create(_: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        }
    }
}

fn switch(switch: Route) -> Html {
    match switch {
        Route::Home => {
            html! { <Party variant={FormVariant::Full} /> }
        }
        Route::Basic => {
            html! { <Party variant={FormVariant::Basic} /> }
        }
    }
}
