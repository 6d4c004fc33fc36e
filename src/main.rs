// src/main.rs — CityPulse test shell entry point
use gloo::console::error;

fn main() {
    match citypulse::start() {
        // The app lives for the lifetime of the page; no unmount.
        Ok(_handle) => {}
        Err(e) => {
            error!(format!("CityPulse bootstrap failed: {e}"));
            wasm_bindgen::throw_str(&e.to_string());
        }
    }
}
