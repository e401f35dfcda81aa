use algo_screener::app;

pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once(); // to see panics in browser devtools
    yew::Renderer::<app::App>::new().render();
}
