#[cfg(feature = "gui")]
mod main_gui;

#[cfg(feature = "gui")]
fn main() {
    main_gui::main();
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("algo-screener is a browser app; build it with the `gui` feature for wasm32");
    std::process::exit(1);
}
