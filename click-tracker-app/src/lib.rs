use click_tracker_yew::{init_tracing, ClientBuilder, DefaultView};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn entry() {
    init_tracing();

    ClientBuilder::<DefaultView>::new().mount_to_body();
}
