//! End-to-end harness: spawns the web server and drives it over HTTP and a
//! headless browser.

pub mod browser;
pub mod test_server;
