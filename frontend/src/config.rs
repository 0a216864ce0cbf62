pub struct Config;

impl Config {
    pub fn api_base_url() -> String {
        // In development, Trunk serves the frontend and proxies /api/ to the
        // analytics service; in production, nginx does the same. Relative
        // URLs work for both, so the base stays empty.
        "".to_string()
    }
}
