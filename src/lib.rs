pub mod catalog;
pub mod config;
pub mod i18n;
pub mod routing;
pub mod seo;
pub mod server;
pub mod slug;
