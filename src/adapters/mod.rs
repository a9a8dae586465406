// Adapters layer: concrete implementations of the domain ports.

pub mod http;
pub mod memory;
pub mod storage;
pub mod terminal;

pub use http::ReqwestTransport;
pub use memory::{Element, MemoryDocument, NavigationRequest, RecordingNavigator, RecordingNotifier};
pub use storage::LocalStorage;
pub use terminal::{TerminalNavigator, TerminalNotifier};
