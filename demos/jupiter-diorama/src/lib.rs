use wasm_bindgen::prelude::*;

mod bodies;
mod game;
mod motion;
use game::JupiterDiorama;

orrery_web::export_scene!(JupiterDiorama, "jupiter-diorama");
