pub mod browser;
pub mod traits;

pub use browser::{build_search_url, OlxBrowserProvider};
pub use traits::FragmentProvider;
