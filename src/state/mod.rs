// ============================================================================
// STATE MODULE - State management with Rc<RefCell> + notifications
// ============================================================================

pub mod nav_state;
pub mod reactivity;

pub use nav_state::*;
pub use reactivity::*;
