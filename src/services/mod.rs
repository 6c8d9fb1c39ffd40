pub mod redirect;
pub mod shortener;

pub use redirect::RedirectService;
pub use shortener::{ShortenedUrl, ShorteningService};
