pub mod headless;

pub use headless::{close_browser, launch_browser, BROWSER_USER_AGENT};
