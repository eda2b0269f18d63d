use vmi_landing::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting VMI Media landing page");
    yew::Renderer::<App>::new().render();
}
