//! CSR entry point. Trunk builds this binary for wasm32 with the `csr`
//! feature enabled; without the feature it is an empty stub so native test
//! builds still link.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(catnova_client::app::App);
    }
}
