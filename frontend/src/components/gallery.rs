use gloo_timers::callback::Interval;
use yew::prelude::*;

const ROTATE_MS: u32 = 4000;

const SLIDES: [&str; 4] = [
    "/assets/gallery/gallery-1.jpg",
    "/assets/gallery/gallery-2.jpg",
    "/assets/gallery/gallery-3.jpg",
    "/assets/gallery/gallery-4.jpg",
];

pub enum Msg {
    Advance,
}

/// Auto-rotating image strip. The interval is dropped together with the
/// component, which cancels the callback.
pub struct Gallery {
    active: usize,
    _interval: Interval,
}

impl Component for Gallery {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let interval = {
            let link = ctx.link().clone();
            Interval::new(ROTATE_MS, move || link.send_message(Msg::Advance))
        };

        Self {
            active: 0,
            _interval: interval,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Advance => {
                self.active = next_slide(self.active, SLIDES.len());
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="rotating-gallery" aria-label="Wings Arena gallery">
                { for SLIDES.iter().enumerate().map(|(idx, src)| {
                    let active = idx == self.active;
                    html! {
                        <img
                            class={classes!("gallery-img", active.then_some("is-active"))}
                            src={*src}
                            alt=""
                            loading="lazy"
                            aria-hidden={if active { "false" } else { "true" }} />
                    }
                }) }
            </div>
        }
    }
}

const fn next_slide(active: usize, len: usize) -> usize {
    (active + 1) % len
}

#[cfg(test)]
mod tests {
    use super::{next_slide, SLIDES};

    #[test]
    fn slides_wrap_around() {
        let mut active = 0;
        for expected in [1, 2, 3, 0, 1] {
            active = next_slide(active, SLIDES.len());
            assert_eq!(active, expected);
        }
    }
}
