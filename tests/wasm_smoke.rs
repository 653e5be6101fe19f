#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use nebula_engine::Scene;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn scene_ticks_in_browser() {
    let mut scene = Scene::new(800, 600);
    scene.tick(js_sys::Date::now());
    assert_eq!(scene.frame(), 1.0);
    assert!(scene.star_positions_len_elements() > 0);
}

#[wasm_bindgen_test]
fn config_json_round_trips() {
    let scene = Scene::new(800, 600);
    let json = scene.config_json();
    let rebuilt = Scene::with_config_json(800, 600, &json).expect("own config re-parses");
    assert_eq!(rebuilt.star_count(), scene.star_count());
}
