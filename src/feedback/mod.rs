pub mod loader;
pub mod toast;

pub use loader::{LoaderGuard, LoaderService};
pub use toast::{Toast, ToastKind, ToastService};
