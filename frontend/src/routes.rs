use yew_router::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Routable)]
pub enum Route {
    #[at("/basic")]
    Basic,
    #[at("/")]
    Home,
}
