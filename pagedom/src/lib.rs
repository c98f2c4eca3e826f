pub mod bus;
pub mod document;
pub mod element;
pub mod event;
pub mod markup;
pub mod registry;
pub mod text;

pub use bus::{PointerBus, PointerEvent, PointerListener, PointerSubscription};
pub use document::Document;
pub use element::{Content, Element, Tag, contains, find_element, is_rendered, path_to};
pub use event::Event;
pub use registry::{Handler, HandlerRegistry, Registration};
