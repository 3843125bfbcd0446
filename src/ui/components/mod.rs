pub mod confirm_dialog;
pub mod dialog_context;
pub mod directory;
pub mod message_banner;
pub mod person_card;
pub mod person_form;
pub mod toolbar;

pub use confirm_dialog::ConfirmDialog;
pub use dialog_context::ConfirmDialogContext;
pub use directory::Directory;
pub use message_banner::MessageBanners;
pub use person_card::PersonCard;
pub use person_form::PersonFormModal;
pub use toolbar::Toolbar;
