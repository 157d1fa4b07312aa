pub mod card_modal;
pub mod carousel;
pub mod mood_gallery;
pub mod navbar;
pub mod share_button;
pub mod signup_modal;
