mod demo_input;
mod saved_state;
mod scaffold_render;
mod scroll_flow;
