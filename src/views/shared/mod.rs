pub mod nav;

pub use nav::render_nav;
