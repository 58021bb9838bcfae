pub mod form;
pub mod layout;
pub mod modal;
pub mod page;
pub mod protected_layout;
pub mod toast;

pub use form::{SubmitButton, TextField};
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::{ErrorPage, LoadingPage, Page};
pub use protected_layout::{
    ProtectedLayout, RequiresInspector, RequiresManager, RequiresSignedIn,
};
pub use toast::ToastContainer;
