//! Page-level language selection for fgadoc snippet viewers.
//!
//! A [`Page`] owns one [`LanguageSelectionStore`]. Every viewer mounted on
//! the page subscribes to it, so one selection drives every visible snippet:
//!
//! ```
//! use fgadoc_codegen::LanguageRegistry;
//! use fgadoc_ir::{CheckInput, OperationModel, TupleKeyInput};
//! use fgadoc_viewer::{MemoryStorage, Page};
//!
//! let page = Page::new(LanguageRegistry::builtin(), MemoryStorage::new());
//! let model = OperationModel::check(CheckInput {
//!     store_id: "01H".into(),
//!     tuple_key: TupleKeyInput::new("user:anne", "viewer", "document:roadmap"),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let viewer = page.mount(model);
//! assert_eq!(viewer.active(), "javascript");
//!
//! viewer.click("python").unwrap();
//! assert_eq!(viewer.active(), "python");
//! assert!(viewer.output().unwrap().contains("fga_client.check("));
//! ```

mod page;
mod storage;
mod store;
mod viewer;

pub use page::Page;
pub use storage::{DurableStorage, FileStorage, MemoryStorage, StorageError};
pub use store::{LanguageSelectionStore, SELECTED_LANGUAGE_KEY, SelectionError, Subscription};
pub use viewer::{ModelContent, SnippetViewer, Tab, TabContent, TabbedViewer};
