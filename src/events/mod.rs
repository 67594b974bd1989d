pub mod pointer;
pub mod resize;
pub mod visibility;

pub use pointer::wire_pointer_tracking;
pub use resize::wire_debounced_resize;
pub use visibility::wire_slide_observer;
