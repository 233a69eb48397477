pub mod runner;

pub use runner::SceneRunner;

/// Generate all `#[wasm_bindgen]` exports for a scene.
///
/// This macro eliminates the per-scene boilerplate by generating:
/// - `thread_local!` storage for the SceneRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (scene_init, scene_tick, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod scene;
/// use scene::MyScene;
///
/// orrery_web::export_scene!(MyScene, "my-scene");
/// ```
///
/// # Arguments
///
/// - `$scene_type`: The scene struct type that implements `orrery_engine::Scene3`
/// - `$scene_name`: A string literal used in the initialization log message
#[macro_export]
macro_rules! export_scene {
    ($scene_type:ty, $scene_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::SceneRunner<$scene_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::SceneRunner<$scene_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Scene not initialized. Call scene_init() first.");
                f(runner)
            })
        }

        #[wasm_bindgen]
        pub fn scene_init() {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let scene = <$scene_type>::new();
            let runner = $crate::SceneRunner::new(scene);

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });

            with_runner(|r| r.init());
            log::info!("{}: initialized", $scene_name);
        }

        #[wasm_bindgen]
        pub fn scene_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn scene_load_manifest(json: &str) {
            with_runner(|r| r.load_manifest(json));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_bodies_ptr() -> *const f32 {
            with_runner(|r| r.bodies_ptr())
        }

        #[wasm_bindgen]
        pub fn get_body_count() -> u32 {
            with_runner(|r| r.body_count())
        }

        #[wasm_bindgen]
        pub fn get_star_positions_ptr() -> *const f32 {
            with_runner(|r| r.star_positions_ptr())
        }

        #[wasm_bindgen]
        pub fn get_star_point_count() -> u32 {
            with_runner(|r| r.star_point_count())
        }

        #[wasm_bindgen]
        pub fn get_star_point_size() -> f32 {
            with_runner(|r| r.star_point_size())
        }

        #[wasm_bindgen]
        pub fn get_star_alpha_test() -> f32 {
            with_runner(|r| r.star_alpha_test())
        }

        #[wasm_bindgen]
        pub fn get_star_opacity() -> f32 {
            with_runner(|r| r.star_opacity())
        }

        #[wasm_bindgen]
        pub fn get_star_sprite_slot() -> f32 {
            with_runner(|r| r.star_sprite_slot())
        }

        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_event_count() -> u32 {
            with_runner(|r| r.event_count())
        }

        // ---- Lighting accessors ----

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count())
        }

        #[wasm_bindgen]
        pub fn get_ambient_r() -> f32 {
            with_runner(|r| r.ambient_r())
        }

        #[wasm_bindgen]
        pub fn get_ambient_g() -> f32 {
            with_runner(|r| r.ambient_g())
        }

        #[wasm_bindgen]
        pub fn get_ambient_b() -> f32 {
            with_runner(|r| r.ambient_b())
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_bodies() -> u32 {
            with_runner(|r| r.max_bodies())
        }

        #[wasm_bindgen]
        pub fn get_max_star_points() -> u32 {
            with_runner(|r| r.max_star_points())
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights())
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events())
        }

        #[wasm_bindgen]
        pub fn get_buffer_total_floats() -> u32 {
            with_runner(|r| r.buffer_total_floats())
        }
    };
}
