//! Trunk entry point: installs logging and mounts the root component.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);
        leptos::mount::mount_to_body(formotex_admin::app::App);
    }
}
