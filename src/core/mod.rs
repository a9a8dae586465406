pub mod format;
pub mod navigation;
pub mod page;
pub mod submission;

pub use crate::domain::model::{FormData, HttpReply, Notification, SubmitEvent, SubmitOutcome};
pub use crate::domain::ports::{
    CalculatorPage, ConfigProvider, Document, Navigator, Notifier, Storage, Transport,
};
pub use crate::utils::error::Result;
