pub mod config;
pub mod credentials;
pub mod document;
pub mod error;
pub mod format;
pub mod parse;
pub mod payload;
pub mod settings;
pub mod source;

pub use config::LoaderConfig;
pub use document::Document;
pub use error::{AppError, InvalidSource};
pub use format::{ACCEPT, DocumentFormat};
pub use payload::FetchedPayload;
pub use settings::{AuthDescriptor, AuthScheme, Settings};
pub use source::SourceRef;
