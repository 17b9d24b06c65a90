use chrono::{Datelike, Utc};
use yew::prelude::*;

pub struct Footer;
impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {}
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let year = Utc::now().year();

        html! {
            <footer class="footer">
                <span>{format!("\u{a9} {year} Wings Arena")}</span>
            </footer>
        }
    }
}
