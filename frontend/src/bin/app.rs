use frontend::{environment, AppRoot};

fn main() {
    console_error_panic_hook::set_once();

    let env = environment::arena_env(option_env!("ARENA_ENV"));
    wasm_logger::init(wasm_logger::Config::new(env.log_level()));

    yew::Renderer::<AppRoot>::new().render();
}
